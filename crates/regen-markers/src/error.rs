//! Error types for regen-markers

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a marker pair an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    Start,
    End,
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start_marker"),
            Self::End => f.write_str("end_marker"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{which} not found: {marker:?}")]
    MarkerNotFound { which: Which, marker: String },

    #[error("end_marker {end:?} appears only before start_marker {start:?}")]
    OutOfOrder { start: String, end: String },

    #[error("start_marker {marker:?} occurs more than once (again on line {line})")]
    DuplicateMarker { marker: String, line: usize },

    #[error("{which} must not be empty")]
    EmptyMarker { which: Which },
}
