//! Canonical source texts.
//!
//! All fixtures use the same markers so that [`manifest`] applies to each:
//!
//! - declaration: `pub enum Container {\n` … `}`
//! - region: `// regen:begin\n` … `        // regen:end`

/// Declaration start marker used by every fixture.
pub const DECL_START: &str = "pub enum Container {\n";
/// Declaration end marker used by every fixture.
pub const DECL_END: &str = "}";
/// Region start marker used by every fixture.
pub const REGION_START: &str = "// regen:begin\n";
/// Region end marker used by every fixture.
pub const REGION_END: &str = "        // regen:end";
/// Template producing one match arm per variant.
pub const TEMPLATE: &str = "        {index} => Some(Container::{name}),\n";

/// Build a source file with the given declaration lines and region body.
pub fn container_source(variants: &[&str], region: &str) -> String {
    let mut declaration = String::new();
    for variant in variants {
        declaration.push_str("    ");
        declaration.push_str(variant);
        declaration.push_str(",\n");
    }
    format!(
        "{DECL_START}{declaration}{DECL_END}\n\
         \n\
         pub fn from_code(code: u32) -> Option<Container> {{\n    \
         match code {{\n        \
         {REGION_START}{region}{REGION_END}\n        \
         _ => None,\n    \
         }}\n\
         }}\n"
    )
}

/// The region body [`TEMPLATE`] renders for `variants`.
pub fn rendered_region(variants: &[&str]) -> String {
    variants
        .iter()
        .enumerate()
        .map(|(i, v)| format!("        {i} => Some(Container::{v}),\n"))
        .collect()
}

/// A source whose region is already in sync with its declaration.
pub fn in_sync_source(variants: &[&str]) -> String {
    container_source(variants, &rendered_region(variants))
}

/// A `regen.toml` with one target named `container` pointing at `path`.
pub fn manifest(path: &str) -> String {
    format!(
        r#"[[target]]
name = "container"
path = "{path}"
template = "        {{index}} => Some(Container::{{name}}),\n"

[target.declaration]
start = "pub enum Container {{\n"
end = "}}"

[target.region]
start = "// regen:begin\n"
end = "        // regen:end"
"#
    )
}

/// Where [`TestProject::write_container`](crate::TestProject::write_container) puts the source.
pub const SOURCE_PATH: &str = "src/container.rs";

/// Shorthand for `manifest(SOURCE_PATH)`.
pub fn default_manifest() -> String {
    manifest(SOURCE_PATH)
}
