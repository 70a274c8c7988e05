//! Single-marker splitting and the three-way partition it composes into.

use std::ops::Range;

use crate::error::{Error, Result, Which};

/// The result of splitting text on a [`MarkerPair`](crate::MarkerPair).
///
/// `prefix + start_marker + inner + end_marker + suffix` is always the
/// original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    /// Text before the start marker.
    pub prefix: &'a str,
    /// Text strictly between the markers.
    pub inner: &'a str,
    /// Text after the end marker.
    pub suffix: &'a str,
    pub start_marker: &'a str,
    pub end_marker: &'a str,
    /// Byte range of `inner` within the original text.
    pub inner_range: Range<usize>,
    /// Byte range from the start of the start marker to the end of the end marker.
    pub outer_range: Range<usize>,
    /// 1-based line on which the start marker begins.
    pub start_line: usize,
    /// 1-based line on which the end marker begins.
    pub end_line: usize,
}

impl Split<'_> {
    /// Rebuild the text with `inner` replaced, keeping prefix, suffix and
    /// both markers verbatim.
    pub fn replace_inner(&self, inner: &str) -> String {
        let mut out = String::with_capacity(
            self.prefix.len()
                + self.start_marker.len()
                + inner.len()
                + self.end_marker.len()
                + self.suffix.len(),
        );
        out.push_str(self.prefix);
        out.push_str(self.start_marker);
        out.push_str(inner);
        out.push_str(self.end_marker);
        out.push_str(self.suffix);
        out
    }

    /// Whether the marked spans of two splits of the same text intersect.
    pub fn overlaps(&self, other: &Split<'_>) -> bool {
        self.outer_range.start < other.outer_range.end
            && other.outer_range.start < self.outer_range.end
    }
}

/// Split `text` at the first occurrence of `marker`, consuming the marker.
///
/// # Errors
///
/// Returns [`Error::MarkerNotFound`] (as a start marker) if `marker` does not
/// occur. [`MarkerPair::split`](crate::MarkerPair::split) rewrites the role
/// when it uses this for the end marker.
///
/// # Example
/// ```
/// use regen_markers::split_once;
///
/// let (before, after) = split_once("enum E {\n    A,\n}", "{\n").unwrap();
/// assert_eq!(before, "enum E ");
/// assert_eq!(after, "    A,\n}");
/// ```
pub fn split_once<'a>(text: &'a str, marker: &str) -> Result<(&'a str, &'a str)> {
    text.split_once(marker).ok_or_else(|| Error::MarkerNotFound {
        which: Which::Start,
        marker: marker.to_string(),
    })
}

pub(crate) fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
