//! Line-oriented variant extraction.
//!
//! The declaration block is not parsed. Every non-blank line is one variant:
//! surrounding whitespace and a single trailing separator are stripped and
//! whatever is left is the identifier, verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One declared item and its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Zero-based position in the declaration block.
    pub index: usize,
    pub name: String,
    /// 1-based line in the source file.
    pub line: usize,
}

/// What to do when the same identifier is declared twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep both; the caller is responsible for the result.
    #[default]
    Allow,
    Reject,
}

/// Knobs for [`extract_variants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Separator stripped from the end of each line.
    pub separator: char,
    /// Set to `false` to keep trailing separators.
    pub strip_separator: bool,
    /// Lines starting with this prefix (after trimming) are skipped.
    pub comment_prefix: Option<String>,
    pub duplicates: DuplicatePolicy,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            strip_separator: true,
            comment_prefix: None,
            duplicates: DuplicatePolicy::Allow,
        }
    }
}

impl ExtractOptions {
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self.strip_separator = true;
        self
    }

    pub fn without_separator(mut self) -> Self {
        self.strip_separator = false;
        self
    }

    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = Some(prefix.into());
        self
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_prefix
            .as_deref()
            .is_some_and(|prefix| !prefix.is_empty() && line.starts_with(prefix))
    }
}

/// Extract the ordered variant list from a declaration block.
///
/// `first_line` is the 1-based source line on which `block` begins and is
/// only used to number the variants.
///
/// # Errors
///
/// - [`Error::EmptyBlock`] if no variant remains
/// - [`Error::DuplicateVariant`] under [`DuplicatePolicy::Reject`]
///
/// # Example
/// ```
/// use regen_core::{ExtractOptions, extract_variants};
///
/// let variants = extract_variants("A,\nB,\n\nC,\n", 1, &ExtractOptions::default()).unwrap();
/// let names: Vec<_> = variants.iter().map(|v| v.name.as_str()).collect();
/// assert_eq!(names, ["A", "B", "C"]);
/// assert_eq!(variants[2].line, 4);
/// ```
pub fn extract_variants(
    block: &str,
    first_line: usize,
    options: &ExtractOptions,
) -> Result<Vec<Variant>> {
    let mut variants: Vec<Variant> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (offset, raw) in block.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || options.is_comment(line) {
            continue;
        }

        let name = if options.strip_separator {
            line.strip_suffix(options.separator).unwrap_or(line)
        } else {
            line
        };
        let line_no = first_line + offset;

        if options.duplicates == DuplicatePolicy::Reject {
            if let Some(&first) = seen.get(name) {
                return Err(Error::DuplicateVariant {
                    name: name.to_string(),
                    first_line: first,
                    line: line_no,
                });
            }
            seen.insert(name.to_string(), line_no);
        }

        variants.push(Variant {
            index: variants.len(),
            name: name.to_string(),
            line: line_no,
        });
    }

    if variants.is_empty() {
        return Err(Error::EmptyBlock);
    }
    tracing::debug!(count = variants.len(), "Extracted variants");
    Ok(variants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(variants: &[Variant]) -> Vec<&str> {
        variants.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn trims_whitespace_and_one_separator() {
        let variants =
            extract_variants("    A,\n\tB ,\n  C,,\nD\n", 1, &ExtractOptions::default()).unwrap();
        assert_eq!(names(&variants), vec!["A", "B ", "C,", "D"]);
    }

    #[test]
    fn blank_lines_are_skipped_but_counted_for_line_numbers() {
        let variants = extract_variants("\nA,\n\n   \nB,\n", 10, &ExtractOptions::default()).unwrap();
        assert_eq!(
            variants,
            vec![
                Variant {
                    index: 0,
                    name: "A".into(),
                    line: 11
                },
                Variant {
                    index: 1,
                    name: "B".into(),
                    line: 14
                },
            ]
        );
    }

    #[test]
    fn identifiers_are_not_validated() {
        let variants =
            extract_variants("Foo(u8),\n#[doc]\n", 1, &ExtractOptions::default()).unwrap();
        assert_eq!(names(&variants), vec!["Foo(u8)", "#[doc]"]);
    }

    #[test]
    fn comment_prefix_skips_lines() {
        let options = ExtractOptions::default().with_comment_prefix("//");
        let variants = extract_variants("// first\nA,\n  // second\nB,\n", 1, &options).unwrap();
        assert_eq!(names(&variants), vec!["A", "B"]);
    }

    #[test]
    fn custom_and_disabled_separator() {
        let semi = ExtractOptions::default().with_separator(';');
        assert_eq!(
            names(&extract_variants("A;\nB,\n", 1, &semi).unwrap()),
            vec!["A", "B,"]
        );

        let raw = ExtractOptions::default().without_separator();
        assert_eq!(
            names(&extract_variants("A,\n", 1, &raw).unwrap()),
            vec!["A,"]
        );
    }

    #[test]
    fn empty_block_is_an_error() {
        assert!(matches!(
            extract_variants("\n   \n", 1, &ExtractOptions::default()),
            Err(Error::EmptyBlock)
        ));
    }

    #[test]
    fn duplicates_allowed_by_default() {
        let variants = extract_variants("A,\nA,\n", 1, &ExtractOptions::default()).unwrap();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[1].index, 1);
    }

    #[test]
    fn duplicates_rejected_on_request() {
        let options = ExtractOptions::default().with_duplicates(DuplicatePolicy::Reject);
        let err = extract_variants("A,\nB,\nA,\n", 5, &options).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateVariant { ref name, first_line: 5, line: 7 } if name == "A"
        ));
    }
}
