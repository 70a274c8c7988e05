//! Process exit codes.
//!
//! Codes follow declaration order. Both tables below are generated from the
//! enum by `regen` itself; see `regen.toml` at the workspace root.

use std::process::ExitCode;

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Unchanged,
    Regenerated,
    Error,
}

impl ExitKind {
    pub fn code(self) -> u8 {
        match self {
            // regen:begin exit-codes
            Self::Unchanged => 0,
            Self::Regenerated => 1,
            Self::Error => 2,
            // regen:end exit-codes
        }
    }

    /// Name used in JSON output.
    pub fn label(self) -> &'static str {
        match self {
            // regen:begin exit-labels
            Self::Unchanged => "unchanged",
            Self::Regenerated => "regenerated",
            Self::Error => "error",
            // regen:end exit-labels
        }
    }
}

impl From<ExitKind> for ExitCode {
    fn from(kind: ExitKind) -> Self {
        ExitCode::from(kind.code())
    }
}
