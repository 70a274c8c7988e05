//! A single unit of regeneration work.

use std::fmt;

use regen_fs::NormalizedPath;
use regen_markers::MarkerPair;

use crate::render::Render;
use crate::variant::ExtractOptions;

/// One file whose generated region mirrors a declaration block.
///
/// The declaration normally lives in the same file as the region; use
/// [`Target::declared_in`] to read it from another file instead. That file
/// is only ever read.
pub struct Target {
    name: String,
    path: NormalizedPath,
    declared_in: Option<NormalizedPath>,
    declaration: MarkerPair,
    region: MarkerPair,
    options: ExtractOptions,
    renderer: Box<dyn Render + Send + Sync>,
}

impl Target {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<NormalizedPath>,
        declaration: MarkerPair,
        region: MarkerPair,
        renderer: impl Render + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            declared_in: None,
            declaration,
            region,
            options: ExtractOptions::default(),
            renderer: Box::new(renderer),
        }
    }

    pub fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    pub fn declared_in(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.declared_in = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file holding the generated region.
    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    /// The file holding the declaration block.
    pub fn declaration_path(&self) -> &NormalizedPath {
        self.declared_in.as_ref().unwrap_or(&self.path)
    }

    /// Whether declaration and region share a file.
    pub fn is_self_contained(&self) -> bool {
        self.declared_in.as_ref().is_none_or(|p| p == &self.path)
    }

    pub fn declaration(&self) -> &MarkerPair {
        &self.declaration
    }

    pub fn region(&self) -> &MarkerPair {
        &self.region
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn renderer(&self) -> &dyn Render {
        self.renderer.as_ref()
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("declared_in", &self.declared_in)
            .field("declaration", &self.declaration)
            .field("region", &self.region)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
