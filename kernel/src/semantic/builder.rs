//! The diff pipelines.

use tracing::{debug, instrument};

use super::{find_effective_acl_changes, perform_semantic_shifts};
use crate::diff::{BaseDiffer, DiffAlgorithm, DiffOptions};
use crate::model::DiffModel;

/// Builds semantic diff models from two configuration texts.
///
/// Holds no state between calls, so one builder can serve many comparisons
/// from several threads.
#[derive(Debug, Default)]
pub struct SemanticDiffBuilder {
    differ: BaseDiffer,
    ignore_removed_duplicate_acls: bool,
}

impl SemanticDiffBuilder {
    /// Creates a builder using Myers' algorithm and default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the base line-diff algorithm.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl DiffAlgorithm + 'static) -> Self {
        self.differ.set_algorithm(algorithm);
        self
    }

    /// Replaces the base comparison options.
    #[must_use]
    pub fn with_options(mut self, options: DiffOptions) -> Self {
        self.differ.set_options(options);
        self
    }

    /// Sets the duplicate-removal option used by
    /// [`build_effective`](Self::build_effective).
    #[must_use]
    pub const fn with_ignore_removed_duplicate_acls(mut self, ignore: bool) -> Self {
        self.ignore_removed_duplicate_acls = ignore;
        self
    }

    /// The base comparison options in effect.
    #[must_use]
    pub const fn options(&self) -> &DiffOptions {
        self.differ.options()
    }

    /// Whether [`build_effective`](Self::build_effective) reports removed
    /// duplicate rules as modified.
    #[must_use]
    pub const fn ignore_removed_duplicate_acls(&self) -> bool {
        self.ignore_removed_duplicate_acls
    }

    /// Base diff, semantic shifts and section tracking.
    #[must_use]
    #[instrument(level = "debug", skip_all)]
    pub fn build_diff_model(&self, old_text: &str, new_text: &str) -> DiffModel {
        let mut model = DiffModel::new(self.differ.diff(old_text, new_text));
        let shifted = perform_semantic_shifts(&mut model);
        model.track_sections();
        debug!(lines = model.len(), shifted, "built diff model");
        model
    }

    /// [`build_diff_model`](Self::build_diff_model) followed by access-list
    /// reconciliation, a second shift pass and fresh section tracking.
    ///
    /// The second shift pass runs after reconciliation so that records turned
    /// `Modified` act as context for the blocks around them.
    #[must_use]
    #[instrument(level = "debug", skip(self, old_text, new_text))]
    pub fn build_effective_diff_model(
        &self,
        old_text: &str,
        new_text: &str,
        ignore_removed_duplicate_acls: bool,
    ) -> DiffModel {
        let mut model = self.build_diff_model(old_text, new_text);
        let summary = find_effective_acl_changes(&mut model, ignore_removed_duplicate_acls);
        let shifted = perform_semantic_shifts(&mut model);
        model.track_sections();
        debug!(lines = model.len(), shifted, ?summary, "built effective diff model");
        model
    }

    /// [`build_effective_diff_model`](Self::build_effective_diff_model) with
    /// the builder's own duplicate-removal option.
    #[must_use]
    pub fn build_effective(&self, old_text: &str, new_text: &str) -> DiffModel {
        self.build_effective_diff_model(old_text, new_text, self.ignore_removed_duplicate_acls)
    }
}

/// [`SemanticDiffBuilder::build_diff_model`] with the default builder.
#[must_use]
pub fn build_diff_model(old_text: &str, new_text: &str) -> DiffModel {
    SemanticDiffBuilder::new().build_diff_model(old_text, new_text)
}

/// [`SemanticDiffBuilder::build_effective_diff_model`] with the default builder.
#[must_use]
pub fn build_effective_diff_model(
    old_text: &str,
    new_text: &str,
    ignore_removed_duplicate_acls: bool,
) -> DiffModel {
    SemanticDiffBuilder::new().build_effective_diff_model(
        old_text,
        new_text,
        ignore_removed_duplicate_acls,
    )
}
