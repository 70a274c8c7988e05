pub const COLORS: &[(&str, u32)] = &[
// regen:begin
    ("red", 0),
// regen:end
];
