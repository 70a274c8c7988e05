//! Marker pairs.

use crate::error::{Error, Result, Which};
use crate::split::{Split, line_of, split_once};

/// Two literal markers delimiting a region.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// Create a marker pair. Both markers must be non-empty; they may be
    /// identical, in which case the next occurrence after the start closes
    /// the region.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(Error::EmptyMarker { which: Which::Start });
        }
        if end.is_empty() {
            return Err(Error::EmptyMarker { which: Which::End });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Split `text` into prefix, inner region and suffix.
    ///
    /// # Errors
    ///
    /// - [`Error::MarkerNotFound`] if either marker is missing
    /// - [`Error::OutOfOrder`] if the end marker only occurs before the start
    /// - [`Error::DuplicateMarker`] if the start marker occurs again after
    ///   the first one (inside the region or after it)
    ///
    /// # Example
    /// ```
    /// use regen_markers::MarkerPair;
    ///
    /// let pair = MarkerPair::new("<<", ">>").unwrap();
    /// let split = pair.split("a << b >> c").unwrap();
    /// assert_eq!(split.prefix, "a ");
    /// assert_eq!(split.inner, " b ");
    /// assert_eq!(split.suffix, " c");
    /// ```
    pub fn split<'a>(&'a self, text: &'a str) -> Result<Split<'a>> {
        let (prefix, rest) = split_once(text, &self.start).map_err(|_| Error::MarkerNotFound {
            which: Which::Start,
            marker: self.start.clone(),
        })?;

        let (inner, suffix) = match split_once(rest, &self.end) {
            Ok(parts) => parts,
            Err(_) if prefix.contains(self.end.as_str()) => {
                return Err(Error::OutOfOrder {
                    start: self.start.clone(),
                    end: self.end.clone(),
                });
            }
            Err(_) => {
                return Err(Error::MarkerNotFound {
                    which: Which::End,
                    marker: self.end.clone(),
                });
            }
        };

        let inner_start = prefix.len() + self.start.len();
        let inner_end = inner_start + inner.len();
        let outer_end = inner_end + self.end.len();

        // The first occurrence is authoritative only if it is the only one.
        let again = inner
            .find(self.start.as_str())
            .map(|pos| inner_start + pos)
            .or_else(|| suffix.find(self.start.as_str()).map(|pos| outer_end + pos));
        if let Some(pos) = again {
            return Err(Error::DuplicateMarker {
                marker: self.start.clone(),
                line: line_of(text, pos),
            });
        }

        let split = Split {
            prefix,
            inner,
            suffix,
            start_marker: &self.start,
            end_marker: &self.end,
            inner_range: inner_start..inner_end,
            outer_range: prefix.len()..outer_end,
            start_line: line_of(text, prefix.len()),
            end_line: line_of(text, inner_end),
        };
        tracing::debug!(
            start_line = split.start_line,
            end_line = split.end_line,
            inner_len = inner.len(),
            "Split region"
        );
        Ok(split)
    }
}
