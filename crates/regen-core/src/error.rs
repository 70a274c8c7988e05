//! Error types for regen-core

use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Which marker pair of a target an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Declaration,
    Region,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => f.write_str("declaration"),
            Self::Region => f.write_str("region"),
        }
    }
}

/// Coarse classification used for exit codes and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required marker is absent.
    MarkerNotFound,
    /// Markers or the declaration block contradict each other.
    MalformedBlock,
    /// The file was rewritten; the caller should re-run.
    Regenerated,
    /// Manifest or template problems.
    Config,
    /// Filesystem failures.
    Io,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] regen_fs::Error),

    #[error("{role} {source} in {path}")]
    Marker {
        role: Role,
        path: PathBuf,
        #[source]
        source: regen_markers::Error,
    },

    #[error("declaration block contains no variants")]
    EmptyBlock,

    #[error("duplicate variant {name:?} on line {line} (first declared on line {first_line})")]
    DuplicateVariant {
        name: String,
        first_line: usize,
        line: usize,
    },

    #[error("declaration block and generated region overlap in {path}")]
    Overlap { path: PathBuf },

    #[error("rendered region of {name:?} would not read back the same from {path}")]
    Unstable { name: String, path: PathBuf },

    #[error("invalid template {template:?}: {message}")]
    Template { template: String, message: String },

    #[error("duplicate target name {name:?} in manifest")]
    DuplicateTarget { name: String },

    #[error("unknown target {name:?}")]
    UnknownTarget { name: String },

    #[error("{path} was regenerated; re-run to confirm it is stable")]
    RegenerationPerformed { path: PathBuf },
}

impl Error {
    pub(crate) fn marker(role: Role, path: impl Into<PathBuf>, source: regen_markers::Error) -> Self {
        Self::Marker {
            role,
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fs(regen_fs::Error::Io { .. } | regen_fs::Error::LockFailed { .. }) => {
                ErrorKind::Io
            }
            Self::Fs(_) => ErrorKind::Config,
            Self::Marker {
                source: regen_markers::Error::MarkerNotFound { .. },
                ..
            } => ErrorKind::MarkerNotFound,
            Self::Marker { .. }
            | Self::EmptyBlock
            | Self::DuplicateVariant { .. }
            | Self::Overlap { .. }
            | Self::Unstable { .. } => ErrorKind::MalformedBlock,
            Self::Template { .. } | Self::DuplicateTarget { .. } | Self::UnknownTarget { .. } => {
                ErrorKind::Config
            }
            Self::RegenerationPerformed { .. } => ErrorKind::Regenerated,
        }
    }
}
