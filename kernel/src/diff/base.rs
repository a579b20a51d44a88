//! Adapter from a [`DiffAlgorithm`] to raw line records.

use std::fmt;

use tracing::debug;

use super::{Chunking, DiffAlgorithm, DiffOp, DiffOptions, MyersDiff};
use crate::chunker::{Chunk, Chunker, LineChunker, SectionPreservingChunker};
use crate::model::DiffLine;

const SECTION_SEPARATOR: char = '\u{1f}';

/// Runs the base line diff and converts its operations into [`DiffLine`]s.
///
/// The records it produces are only `Unchanged`, `Inserted` or `Deleted`,
/// without section starts.
pub struct BaseDiffer {
    algorithm: Box<dyn DiffAlgorithm>,
    options: DiffOptions,
}

impl BaseDiffer {
    /// Creates a differ around `algorithm`.
    pub fn new(algorithm: impl DiffAlgorithm + 'static, options: DiffOptions) -> Self {
        Self {
            algorithm: Box::new(algorithm),
            options,
        }
    }

    /// The comparison options in effect.
    #[must_use]
    pub const fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Replaces the comparison options.
    pub const fn set_options(&mut self, options: DiffOptions) {
        self.options = options;
    }

    /// Replaces the line-diff algorithm.
    pub fn set_algorithm(&mut self, algorithm: impl DiffAlgorithm + 'static) {
        self.algorithm = Box::new(algorithm);
    }

    /// Diffs two texts line by line.
    ///
    /// Unchanged records carry the new text's version of the line. A replaced
    /// run lists all of its deleted lines before its inserted lines.
    #[must_use]
    pub fn diff(&self, old_text: &str, new_text: &str) -> Vec<DiffLine> {
        let chunker: &dyn Chunker = match self.options.chunking {
            Chunking::Lines => &LineChunker,
            Chunking::SectionPreserving => &SectionPreservingChunker,
        };
        let old_chunks = chunker.chunk(old_text);
        let new_chunks = chunker.chunk(new_text);

        let old_keys: Vec<String> = old_chunks.iter().map(|c| self.comparison_key(c)).collect();
        let new_keys: Vec<String> = new_chunks.iter().map(|c| self.comparison_key(c)).collect();
        let old_refs: Vec<&str> = old_keys.iter().map(String::as_str).collect();
        let new_refs: Vec<&str> = new_keys.iter().map(String::as_str).collect();

        let ops = self.algorithm.diff(&old_refs, &new_refs);
        debug!(
            old_lines = old_chunks.len(),
            new_lines = new_chunks.len(),
            operations = ops.len(),
            "base diff computed"
        );

        let mut lines = Vec::with_capacity(old_chunks.len().max(new_chunks.len()));
        for op in ops {
            match op {
                DiffOp::Equal {
                    new_start, new_end, ..
                } => push_present(&mut lines, &new_chunks, new_start, new_end, DiffLine::unchanged),
                DiffOp::Insert { new_start, new_end } => {
                    push_present(&mut lines, &new_chunks, new_start, new_end, DiffLine::inserted);
                }
                DiffOp::Delete { old_start, old_end } => {
                    push_deleted(&mut lines, &old_chunks, old_start, old_end);
                }
                DiffOp::Replace {
                    old_start,
                    old_end,
                    new_start,
                    new_end,
                } => {
                    push_deleted(&mut lines, &old_chunks, old_start, old_end);
                    push_present(&mut lines, &new_chunks, new_start, new_end, DiffLine::inserted);
                }
            }
        }
        lines
    }

    fn comparison_key(&self, chunk: &Chunk<'_>) -> String {
        let (section, text) = if self.options.ignore_whitespace {
            (chunk.section.trim(), chunk.text.trim())
        } else {
            (chunk.section, chunk.text)
        };
        let mut key = String::with_capacity(section.len() + text.len() + 1);
        key.push_str(section);
        key.push(SECTION_SEPARATOR);
        key.push_str(text);
        if self.options.ignore_case {
            key.to_lowercase()
        } else {
            key
        }
    }
}

impl Default for BaseDiffer {
    fn default() -> Self {
        Self::new(MyersDiff::new(), DiffOptions::default())
    }
}

impl fmt::Debug for BaseDiffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseDiffer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn push_present(
    lines: &mut Vec<DiffLine>,
    chunks: &[Chunk<'_>],
    start: usize,
    end: usize,
    make: fn(String, usize) -> DiffLine,
) {
    lines.extend(
        chunks[start..end]
            .iter()
            .zip(start + 1..)
            .map(|(chunk, position)| make(chunk.text.to_owned(), position)),
    );
}

fn push_deleted(lines: &mut Vec<DiffLine>, chunks: &[Chunk<'_>], start: usize, end: usize) {
    lines.extend(
        chunks[start..end]
            .iter()
            .map(|chunk| DiffLine::deleted(chunk.text)),
    );
}
