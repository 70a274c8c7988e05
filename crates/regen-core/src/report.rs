//! Run reports and change previews.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

use crate::regen::Outcome;

/// A line diff between the stored and the regenerated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// Unified diff with three lines of context.
    pub unified: String,
    pub added: usize,
    pub removed: usize,
}

impl Preview {
    /// Compute a unified diff; `label` names both sides of the header.
    pub fn compute(old: &str, new: &str, label: &str) -> Self {
        let diff = TextDiff::from_lines(old, new);

        let (mut added, mut removed) = (0, 0);
        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => added += 1,
                ChangeTag::Delete => removed += 1,
                ChangeTag::Equal => {}
            }
        }

        let unified = diff
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{label}"), &format!("b/{label}"))
            .to_string();

        Self {
            unified,
            added,
            removed,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// What happened to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub name: String,
    pub path: String,
    pub outcome: Outcome,
    /// Number of variants found in the declaration block.
    pub variants: usize,
    pub checksum_before: String,
    pub checksum_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}

impl TargetReport {
    /// True when the file on disk differs (or would differ) from the
    /// regenerated content.
    pub fn needs_attention(&self) -> bool {
        self.outcome != Outcome::Unchanged
    }
}
