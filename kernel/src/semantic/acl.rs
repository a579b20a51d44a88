//! Effective access-list changes.
//!
//! Reordering rules inside a run of the same polarity does not change what an
//! access list does, and neither does rewording a remark. This pass folds such
//! insert/delete pairs into `Modified` markers so a reviewer only sees changes
//! that alter behaviour.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::model::{ChangeKind, DiffLine, DiffModel};
use crate::syntax::{Polarity, is_acl_header, is_remark};

/// What [`find_effective_acl_changes`] did to a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AclSummary {
    /// Deleted remarks removed from the model.
    pub remarks_dropped: usize,
    /// Inserted remarks reported as modified.
    pub remarks_modified: usize,
    /// Rules that only moved within their window.
    pub relocations: usize,
    /// Removed rules that still exist as an unchanged duplicate.
    pub duplicates_ignored: usize,
}

/// Rule lines collected between two window boundaries, keyed by trimmed text.
#[derive(Debug, Default)]
struct RuleWindow {
    removals: Vec<(usize, String)>,
    additions: HashMap<String, VecDeque<usize>>,
    unchanged: HashSet<String>,
}

impl RuleWindow {
    fn classify(&mut self, index: usize, line: &DiffLine) {
        let key = line.text.trim().to_owned();
        match line.kind {
            ChangeKind::Deleted => self.removals.push((index, key)),
            ChangeKind::Inserted => self.additions.entry(key).or_default().push_back(index),
            ChangeKind::Unchanged => {
                self.unchanged.insert(key);
            }
            ChangeKind::Modified => {}
        }
    }

    /// Reconciles the window and clears it.
    fn flush(
        &mut self,
        lines: &mut [DiffLine],
        removed: &mut [bool],
        ignore_removed_duplicates: bool,
        summary: &mut AclSummary,
    ) {
        for (index, key) in self.removals.drain(..) {
            let addition = self.additions.get_mut(&key).and_then(VecDeque::pop_front);
            if let Some(addition) = addition {
                removed[index] = true;
                lines[addition].kind = ChangeKind::Modified;
                summary.relocations += 1;
                debug!(rule = %key, "collapsed relocated acl rule");
            } else if ignore_removed_duplicates && self.unchanged.contains(&key) {
                lines[index].kind = ChangeKind::Modified;
                summary.duplicates_ignored += 1;
                debug!(rule = %key, "ignored removal of duplicate acl rule");
            }
        }
        self.additions.clear();
        self.unchanged.clear();
    }
}

/// Reclassifies remark and rule changes inside access-list sections.
///
/// Deleted remarks are dropped and inserted remarks become `Modified` across
/// the whole model. Rules are then reconciled per window: a window ends where
/// the section changes or the polarity flips between two rules. A rule removed
/// and added again in the same window is one `Modified` record; a removed rule
/// that survives as an unchanged copy becomes `Modified` when
/// `ignore_removed_duplicate_acls` is set.
///
/// Section starts must be current when this runs. Records are only removed
/// after the scan, so section starts may be stale afterwards; re-run section
/// tracking before relying on them.
pub fn find_effective_acl_changes(
    model: &mut DiffModel,
    ignore_removed_duplicate_acls: bool,
) -> AclSummary {
    let lines = model.lines.as_mut_slice();
    let mut summary = AclSummary::default();
    let mut removed = vec![false; lines.len()];

    for (line, removed) in lines.iter_mut().zip(removed.iter_mut()) {
        if !is_remark(&line.text) {
            continue;
        }
        match line.kind {
            ChangeKind::Deleted => {
                *removed = true;
                summary.remarks_dropped += 1;
            }
            ChangeKind::Inserted => {
                line.kind = ChangeKind::Modified;
                summary.remarks_modified += 1;
            }
            ChangeKind::Unchanged | ChangeKind::Modified => {}
        }
    }

    let acl_sections: HashSet<usize> = lines
        .iter()
        .filter(|line| line.position.is_some() && line.section_start_position == line.position)
        .filter(|line| is_acl_header(&line.text))
        .filter_map(|line| line.position)
        .collect();

    let mut window = RuleWindow::default();
    let mut previous_section: Option<Option<usize>> = None;
    let mut previous_polarity: Option<Polarity> = None;

    for index in 0..lines.len() {
        if removed[index] {
            continue;
        }
        let section = lines[index].section_start_position;
        if previous_section != Some(section) {
            window.flush(lines, &mut removed, ignore_removed_duplicate_acls, &mut summary);
            previous_section = Some(section);
            previous_polarity = None;
        }
        if !section.is_some_and(|start| acl_sections.contains(&start)) {
            continue;
        }

        let line = &lines[index];
        let polarity = Polarity::of(&line.text);
        if let Some(polarity) = polarity {
            if previous_polarity.is_some_and(|previous| previous != polarity) {
                window.flush(lines, &mut removed, ignore_removed_duplicate_acls, &mut summary);
            }
            previous_polarity = Some(polarity);
        }
        let line = &lines[index];
        if polarity.is_some() || is_remark(&line.text) {
            window.classify(index, line);
        }
    }
    window.flush(lines, &mut removed, ignore_removed_duplicate_acls, &mut summary);

    let mut removed = removed.into_iter();
    model
        .lines
        .retain(|_| !removed.next().unwrap_or(false));

    debug!(
        remarks_dropped = summary.remarks_dropped,
        remarks_modified = summary.remarks_modified,
        relocations = summary.relocations,
        duplicates_ignored = summary.duplicates_ignored,
        "resolved effective acl changes"
    );
    summary
}
