//! Error types for diff model validation.

use thiserror::Error;

use crate::model::ChangeKind;

/// A violated structural invariant of a [`DiffModel`](crate::model::DiffModel).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A position does not increase over the previous positioned line.
    #[error("line {index}: position {position} does not follow position {previous}")]
    PositionOutOfOrder {
        /// Index of the offending line in the model.
        index: usize,
        /// Position carried by the offending line.
        position: usize,
        /// Position of the closest preceding positioned line.
        previous: usize,
    },
    /// An unchanged or inserted line has no position in the new text.
    #[error("line {index}: {kind} line has no position")]
    MissingPosition {
        /// Index of the offending line in the model.
        index: usize,
        /// Change kind of the offending line.
        kind: ChangeKind,
    },
    /// A deleted line claims a position in the new text.
    #[error("line {index}: deleted line carries position {position}")]
    DeletedWithPosition {
        /// Index of the offending line in the model.
        index: usize,
        /// Position carried by the offending line.
        position: usize,
    },
    /// A section start does not point at a section header.
    #[error("line {index}: section start {section_start} is not a section header")]
    DanglingSectionStart {
        /// Index of the offending line in the model.
        index: usize,
        /// The referenced position.
        section_start: usize,
    },
}
