//! Line records and the diff model handed to formatters.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::semantic::section::assign_section_starts;

/// How a line differs between the old and the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present in both texts.
    Unchanged,
    /// Present only in the new text.
    Inserted,
    /// Present only in the old text.
    Deleted,
    /// Changed in a way the semantic passes consider cosmetic.
    Modified,
}

impl ChangeKind {
    /// Returns true for kinds that count as context around a changed block.
    #[must_use]
    pub const fn is_context(self) -> bool {
        matches!(self, Self::Unchanged | Self::Modified)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unchanged => "unchanged",
            Self::Inserted => "inserted",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
        };
        f.write_str(name)
    }
}

/// One line of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Line content without its terminator.
    pub text: String,
    /// Change classification.
    pub kind: ChangeKind,
    /// 1-based line number in the new text, `None` for lines that do not exist there.
    pub position: Option<usize>,
    /// Position of the header of the enclosing section.
    pub section_start_position: Option<usize>,
}

impl DiffLine {
    /// Creates a line without section information.
    pub fn new(text: impl Into<String>, kind: ChangeKind, position: Option<usize>) -> Self {
        Self {
            text: text.into(),
            kind,
            position,
            section_start_position: None,
        }
    }

    /// Line present in both texts at `position`.
    pub fn unchanged(text: impl Into<String>, position: usize) -> Self {
        Self::new(text, ChangeKind::Unchanged, Some(position))
    }

    /// Line added at `position`.
    pub fn inserted(text: impl Into<String>, position: usize) -> Self {
        Self::new(text, ChangeKind::Inserted, Some(position))
    }

    /// Line removed from the old text.
    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(text, ChangeKind::Deleted, None)
    }

    /// Line with a cosmetic change.
    pub fn modified(text: impl Into<String>, position: Option<usize>) -> Self {
        Self::new(text, ChangeKind::Modified, position)
    }

    /// Sets the section start.
    #[must_use]
    pub fn with_section_start(mut self, section_start: Option<usize>) -> Self {
        self.section_start_position = section_start;
        self
    }

    /// Returns true if the line exists in the new text.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.position.is_some() && !matches!(self.kind, ChangeKind::Deleted)
    }
}

/// Ordered line records describing how an old text became a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffModel {
    pub(crate) lines: Vec<DiffLine>,
}

impl DiffModel {
    /// Wraps line records as they are, without touching section starts.
    #[must_use]
    pub const fn new(lines: Vec<DiffLine>) -> Self {
        Self { lines }
    }

    /// Wraps line records and derives the section start of every line.
    #[must_use]
    pub fn from_base(lines: Vec<DiffLine>) -> Self {
        let mut model = Self::new(lines);
        model.track_sections();
        model
    }

    /// Recomputes section starts from the current kinds and positions.
    pub fn track_sections(&mut self) {
        assign_section_starts(&mut self.lines);
    }

    /// The line records in document order.
    #[must_use]
    pub fn lines(&self) -> &[DiffLine] {
        &self.lines
    }

    /// Mutable access to the records. The record count cannot change through it.
    pub fn lines_mut(&mut self) -> &mut [DiffLine] {
        &mut self.lines
    }

    /// Consumes the model.
    #[must_use]
    pub fn into_lines(self) -> Vec<DiffLine> {
        self.lines
    }

    /// Iterates the records in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiffLine> {
        self.lines.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the model has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true if any record is something other than unchanged.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        self.lines
            .iter()
            .any(|line| line.kind != ChangeKind::Unchanged)
    }

    /// Checks the structural invariants every pipeline output satisfies.
    ///
    /// # Errors
    ///
    /// Returns the first violation found in document order.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut previous: Option<usize> = None;
        let mut headers: HashMap<usize, Option<usize>> = HashMap::new();

        for (index, line) in self.lines.iter().enumerate() {
            match (line.kind, line.position) {
                (ChangeKind::Deleted, Some(position)) => {
                    return Err(ModelError::DeletedWithPosition { index, position });
                }
                (kind @ (ChangeKind::Unchanged | ChangeKind::Inserted), None) => {
                    return Err(ModelError::MissingPosition { index, kind });
                }
                _ => {}
            }

            if let Some(position) = line.position {
                if let Some(previous) = previous.filter(|&previous| position <= previous) {
                    return Err(ModelError::PositionOutOfOrder {
                        index,
                        position,
                        previous,
                    });
                }
                previous = Some(position);
                headers.insert(position, line.section_start_position);
            }
        }

        for (index, line) in self.lines.iter().enumerate() {
            if let Some(section_start) = line.section_start_position {
                if headers.get(&section_start) != Some(&Some(section_start)) {
                    return Err(ModelError::DanglingSectionStart {
                        index,
                        section_start,
                    });
                }
            }
        }

        Ok(())
    }
}

impl From<Vec<DiffLine>> for DiffModel {
    fn from(lines: Vec<DiffLine>) -> Self {
        Self::new(lines)
    }
}

impl<'a> IntoIterator for &'a DiffModel {
    type Item = &'a DiffLine;
    type IntoIter = std::slice::Iter<'a, DiffLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_differences_ignores_unchanged() {
        let model = DiffModel::new(vec![
            DiffLine::unchanged("hostname sw1", 1),
            DiffLine::unchanged("!", 2),
        ]);
        assert!(!model.has_differences());

        let model = DiffModel::new(vec![
            DiffLine::unchanged("hostname sw1", 1),
            DiffLine::modified("  remark x", Some(2)),
        ]);
        assert!(model.has_differences());
    }

    #[test]
    fn empty_model_has_no_differences() {
        assert!(!DiffModel::default().has_differences());
        assert!(DiffModel::default().validate().is_ok());
    }

    #[test]
    fn validate_accepts_tracked_model() {
        let model = DiffModel::from_base(vec![
            DiffLine::unchanged("interface Vlan10", 1),
            DiffLine::deleted(" shutdown"),
            DiffLine::inserted(" no shutdown", 2),
            DiffLine::unchanged("!", 3),
        ]);
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_positions_out_of_order() {
        let model = DiffModel::new(vec![
            DiffLine::unchanged("a", 2),
            DiffLine::unchanged("b", 2),
        ]);
        assert_eq!(
            model.validate(),
            Err(ModelError::PositionOutOfOrder {
                index: 1,
                position: 2,
                previous: 2,
            })
        );
    }

    #[test]
    fn validate_rejects_deleted_with_position() {
        let model = DiffModel::new(vec![DiffLine::new("a", ChangeKind::Deleted, Some(1))]);
        assert_eq!(
            model.validate(),
            Err(ModelError::DeletedWithPosition {
                index: 0,
                position: 1,
            })
        );
    }

    #[test]
    fn validate_rejects_missing_position() {
        let model = DiffModel::new(vec![DiffLine::new("a", ChangeKind::Inserted, None)]);
        assert_eq!(
            model.validate(),
            Err(ModelError::MissingPosition {
                index: 0,
                kind: ChangeKind::Inserted,
            })
        );
    }

    #[test]
    fn validate_rejects_section_start_on_non_header() {
        let model = DiffModel::new(vec![
            DiffLine::unchanged("interface Vlan10", 1).with_section_start(Some(1)),
            DiffLine::unchanged(" no shutdown", 2).with_section_start(Some(1)),
            DiffLine::unchanged(" ip address", 3).with_section_start(Some(2)),
        ]);
        assert_eq!(
            model.validate(),
            Err(ModelError::DanglingSectionStart {
                index: 2,
                section_start: 2,
            })
        );
    }

    #[test]
    fn change_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ChangeKind::Unchanged).unwrap();
        assert_eq!(json, "\"unchanged\"");
    }
}
