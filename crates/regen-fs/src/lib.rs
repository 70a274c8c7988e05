//! Filesystem primitives for regen
//!
//! Path normalization, atomic locked writes, content checksums and
//! format-agnostic loading of the target manifest.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
