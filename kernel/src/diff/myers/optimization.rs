//! Pre- and post-processing around the Myers search.
//!
//! Configuration revisions usually share long runs of identical lines at the
//! start and end, so those are split off before the O(ND) search runs.

use crate::diff::DiffOp;

/// Number of leading lines equal in both sequences.
pub(crate) fn common_prefix_len(base: &[&str], target: &[&str]) -> usize {
    base.iter()
        .zip(target)
        .take_while(|(left, right)| left == right)
        .count()
}

/// Number of trailing lines equal in both sequences.
pub(crate) fn common_suffix_len(base: &[&str], target: &[&str]) -> usize {
    base.iter()
        .rev()
        .zip(target.iter().rev())
        .take_while(|(left, right)| left == right)
        .count()
}

/// Merges adjacent operations of the same shape.
///
/// Neighbouring `Equal` runs become one run, and any sequence of changes with
/// no equal run in between becomes a single `Delete`, `Insert` or `Replace`.
pub(crate) fn coalesce_operations(ops: &mut Vec<DiffOp>) {
    if ops.len() < 2 {
        return;
    }

    let mut merged: Vec<DiffOp> = Vec::with_capacity(ops.len());
    for op in ops.drain(..) {
        let combined = match (merged.last(), &op) {
            (
                Some(DiffOp::Equal {
                    old_start,
                    old_end,
                    new_start,
                    new_end,
                }),
                DiffOp::Equal {
                    old_start: next_old,
                    old_end: next_old_end,
                    new_start: next_new,
                    new_end: next_new_end,
                },
            ) if old_end == next_old && new_end == next_new => Some(DiffOp::Equal {
                old_start: *old_start,
                old_end: *next_old_end,
                new_start: *new_start,
                new_end: *next_new_end,
            }),
            (Some(last), next) if last.is_change() && next.is_change() => {
                let (old_start, old_end) = old_span(last, next);
                let (new_start, new_end) = new_span(last, next);
                Some(change(old_start, old_end, new_start, new_end))
            }
            _ => None,
        };

        match combined {
            Some(combined) => {
                if let Some(last) = merged.last_mut() {
                    *last = combined;
                }
            }
            None => merged.push(op),
        }
    }
    *ops = merged;
}

fn old_bounds(op: &DiffOp) -> Option<(usize, usize)> {
    match op {
        DiffOp::Delete { old_start, old_end }
        | DiffOp::Replace {
            old_start, old_end, ..
        }
        | DiffOp::Equal {
            old_start, old_end, ..
        } => Some((*old_start, *old_end)),
        DiffOp::Insert { .. } => None,
    }
}

fn new_bounds(op: &DiffOp) -> Option<(usize, usize)> {
    match op {
        DiffOp::Insert { new_start, new_end }
        | DiffOp::Replace {
            new_start, new_end, ..
        }
        | DiffOp::Equal {
            new_start, new_end, ..
        } => Some((*new_start, *new_end)),
        DiffOp::Delete { .. } => None,
    }
}

fn old_span(first: &DiffOp, second: &DiffOp) -> (usize, usize) {
    match (old_bounds(first), old_bounds(second)) {
        (Some((start, _)), Some((_, end))) => (start, end),
        (Some(bounds), None) | (None, Some(bounds)) => bounds,
        (None, None) => (0, 0),
    }
}

fn new_span(first: &DiffOp, second: &DiffOp) -> (usize, usize) {
    match (new_bounds(first), new_bounds(second)) {
        (Some((start, _)), Some((_, end))) => (start, end),
        (Some(bounds), None) | (None, Some(bounds)) => bounds,
        (None, None) => (0, 0),
    }
}

fn change(old_start: usize, old_end: usize, new_start: usize, new_end: usize) -> DiffOp {
    match (old_start < old_end, new_start < new_end) {
        (true, true) => DiffOp::Replace {
            old_start,
            old_end,
            new_start,
            new_end,
        },
        (true, false) => DiffOp::Delete { old_start, old_end },
        _ => DiffOp::Insert { new_start, new_end },
    }
}
