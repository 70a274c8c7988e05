//! Command implementations for regen-cli

pub mod inspect;
pub mod sync;

pub use inspect::{run_list, run_variants};
pub use sync::{run_check, run_diff, run_sync};

use std::path::Path;

use regen_core::Manifest;
use regen_fs::NormalizedPath;

use crate::error::Result;

/// Load the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let manifest = Manifest::load(&NormalizedPath::new(path))?;
    tracing::debug!(path = %path.display(), targets = manifest.targets.len(), "Manifest ready");
    Ok(manifest)
}
