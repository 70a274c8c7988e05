pub enum Color {
    Red,
    Green,
    Blue,
}
