//! Switchdiff Kernel - semantic diffs for switch and router configurations.
//!
//! This crate compares two revisions of a section-oriented configuration
//! (sections open at a header line and close at a `!` line) and produces a
//! [`DiffModel`] that a formatter can print. A plain line diff is computed
//! first; semantic passes then move changed blocks onto section boundaries,
//! label every line with its section header and, for the effective diff,
//! hide access-list noise such as reordered rules and reworded remarks.
//!
//! ```
//! use switchdiff_kernel::{ChangeKind, build_diff_model};
//!
//! let old = "ip access-list extended A\n remark X\n permit tcp any any\n!";
//! let new = format!("{old}\nip access-list extended B\n remark X\n permit udp any any\n!");
//! let model = build_diff_model(old, &new);
//!
//! assert_eq!(model.len(), 8);
//! assert!(model.lines()[4..].iter().all(|line| line.kind == ChangeKind::Inserted));
//! ```

/// Splitting text into comparable lines.
pub mod chunker;
/// Base line diff and the pluggable algorithm behind it.
pub mod diff;
/// Error types.
pub mod error;
/// Configuration and logging bootstrap.
pub mod infrastructure;
/// Line records and the diff model.
pub mod model;
/// Semantic passes and pipelines.
pub mod semantic;
/// Configuration keyword recognition.
pub mod syntax;

pub use diff::{BaseDiffer, Chunking, DiffAlgorithm, DiffOp, DiffOptions, MyersDiff};
pub use error::ModelError;
pub use model::{ChangeKind, DiffLine, DiffModel};
pub use semantic::{
    AclSummary, SemanticDiffBuilder, ShiftCandidate, build_diff_model,
    build_effective_diff_model, find_effective_acl_changes, perform_semantic_shifts,
};
