//! Semantic passes over a base line diff.
//!
//! Each pass mutates a [`DiffModel`](crate::model::DiffModel) in place:
//!
//! - [`shift`] moves changed blocks to section-friendly boundaries.
//! - [`section`] labels every line with its section header.
//! - [`acl`] folds access-list reorderings into `Modified` lines.
//!
//! [`builder`] chains them into the two public pipelines.

pub mod acl;
pub mod builder;
pub mod section;
pub mod shift;

pub use acl::{AclSummary, find_effective_acl_changes};
pub use builder::{SemanticDiffBuilder, build_diff_model, build_effective_diff_model};
pub use section::assign_section_starts;
pub use shift::{ShiftCandidate, perform_semantic_shifts};
