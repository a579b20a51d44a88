//! Line-level base diff.
//!
//! The base diff knows nothing about configuration syntax: it aligns two
//! sequences of lines through a pluggable [`DiffAlgorithm`] and turns the
//! result into raw [`DiffLine`](crate::model::DiffLine) records. The semantic
//! passes then clean those records up.

pub mod base;
pub mod myers;

use serde::{Deserialize, Serialize};

pub use base::BaseDiffer;
pub use myers::MyersDiff;

/// A single diff operation between two sequences of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Lines that are unchanged between both texts.
    Equal {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were inserted in the new text.
    Insert {
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
    /// Lines that were deleted from the old text.
    Delete {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
    },
    /// Lines that were replaced (deleted and inserted).
    Replace {
        /// Start line index in the old text (0-based, inclusive).
        old_start: usize,
        /// End line index in the old text (0-based, exclusive).
        old_end: usize,
        /// Start line index in the new text (0-based, inclusive).
        new_start: usize,
        /// End line index in the new text (0-based, exclusive).
        new_end: usize,
    },
}

impl DiffOp {
    /// Returns true if this operation represents a change (not equal).
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Trait for diff algorithms.
///
/// Implementations compare lines by equality only and may pick any alignment
/// that is a valid edit script. The `Send + Sync` bound lets one differ be
/// shared across threads.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the operations that transform `base` into `target`.
    ///
    /// Operations are ordered, contiguous and together cover both inputs.
    fn diff(&self, base: &[&str], target: &[&str]) -> Vec<DiffOp>;
}

/// How input text is split before diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chunking {
    /// Plain lines.
    Lines,
    /// Lines tagged with the header of their section.
    #[default]
    SectionPreserving,
}

/// Options of the base line comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Compare lines with surrounding whitespace removed.
    #[serde(default = "default_ignore_whitespace")]
    pub ignore_whitespace: bool,
    /// Compare lines case-insensitively.
    #[serde(default)]
    pub ignore_case: bool,
    /// Chunking strategy (default: section preserving).
    #[serde(default)]
    pub chunking: Chunking,
}

const fn default_ignore_whitespace() -> bool {
    true
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: default_ignore_whitespace(),
            ignore_case: false,
            chunking: Chunking::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_op_is_change() {
        assert!(
            !DiffOp::Equal {
                old_start: 0,
                old_end: 1,
                new_start: 0,
                new_end: 1,
            }
            .is_change()
        );
        assert!(
            DiffOp::Replace {
                old_start: 0,
                old_end: 1,
                new_start: 0,
                new_end: 2,
            }
            .is_change()
        );
    }

    #[test]
    fn test_default_options() {
        let options = DiffOptions::default();
        assert!(options.ignore_whitespace);
        assert!(!options.ignore_case);
        assert_eq!(options.chunking, Chunking::SectionPreserving);
    }
}
