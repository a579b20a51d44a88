//! Myers diff algorithm.
use super::optimization::{coalesce_operations, common_prefix_len, common_suffix_len};
use crate::diff::{DiffAlgorithm, DiffOp};
/// Myers diff algorithm.
///
/// Uses the linear-space variant: the problem is split at the middle snake of
/// an optimal path and both halves are solved recursively, trimming common
/// prefixes and suffixes at every level.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersDiff;
impl MyersDiff {
    /// Creates new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}
impl DiffAlgorithm for MyersDiff {
    fn diff(&self, base: &[&str], target: &[&str]) -> Vec<DiffOp> {
        let mut changes = Changes {
            old: vec![false; base.len()],
            new: vec![false; target.len()],
        };
        mark_changes(base, target, 0, 0, &mut changes);
        convert_changes_to_diff_ops(&changes)
    }
}
/// Per-line change flags of both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Changes {
    pub(crate) old: Vec<bool>,
    pub(crate) new: Vec<bool>,
}
/// Diagonal run in the middle of an optimal edit path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snake {
    pub(crate) old_start: usize,
    pub(crate) new_start: usize,
    pub(crate) old_end: usize,
    pub(crate) new_end: usize,
}
/// Flags every line outside one shortest edit script.
///
/// `old_offset` and `new_offset` locate `base` and `target` inside `changes`.
pub(crate) fn mark_changes(
    base: &[&str],
    target: &[&str],
    old_offset: usize,
    new_offset: usize,
    changes: &mut Changes,
) {
    let prefix = common_prefix_len(base, target);
    let (base, target) = (&base[prefix..], &target[prefix..]);
    let suffix = common_suffix_len(base, target);
    let base = &base[..base.len() - suffix];
    let target = &target[..target.len() - suffix];
    let (old_offset, new_offset) = (old_offset + prefix, new_offset + prefix);

    if base.is_empty() {
        changes.new[new_offset..new_offset + target.len()].fill(true);
        return;
    }
    if target.is_empty() {
        changes.old[old_offset..old_offset + base.len()].fill(true);
        return;
    }

    let snake = middle_snake(base, target);
    mark_changes(
        &base[..snake.old_start],
        &target[..snake.new_start],
        old_offset,
        new_offset,
        changes,
    );
    mark_changes(
        &base[snake.old_end..],
        &target[snake.new_end..],
        old_offset + snake.old_end,
        new_offset + snake.new_end,
        changes,
    );
}
/// Finds the snake where a forward and a reverse search of equal cost meet.
///
/// Both inputs must be non-empty and must differ in their first and last
/// lines, so the snake never spans both inputs whole.
pub(crate) fn middle_snake(base: &[&str], target: &[&str]) -> Snake {
    let (n, m) = (base.len() as isize, target.len() as isize);
    let half = (n + m + 1) / 2;
    let delta = n - m;
    let odd = delta % 2 != 0;
    let at = |k: isize| (k + half + 1) as usize;
    let mut forward: Vec<isize> = vec![0; at(half + 1) + 1];
    let mut reverse: Vec<isize> = vec![0; at(half + 1) + 1];
    reverse[at(1)] = n + 1;

    for d in 0..=half {
        for k in (-d..=d).step_by(2) {
            let start_x = if k == -d || (k != d && forward[at(k - 1)] < forward[at(k + 1)]) {
                forward[at(k + 1)]
            } else {
                forward[at(k - 1)] + 1
            };
            let start_y = start_x - k;
            let (mut x, mut y) = (start_x, start_y);
            while x < n && y < m && base[x as usize] == target[y as usize] {
                x += 1;
                y += 1;
            }
            forward[at(k)] = x;
            // reverse paths of cost d - 1 on the same diagonal
            if odd && (k - delta).abs() < d {
                let reverse_x = reverse[at(k - delta)];
                if reverse_x <= x && reverse_x - k <= y {
                    return snake(start_x, start_y, x, y);
                }
            }
        }

        for k in (-d..=d).step_by(2) {
            let end_x = if k == -d || (k != d && reverse[at(k + 1)] <= reverse[at(k - 1)]) {
                reverse[at(k + 1)] - 1
            } else {
                reverse[at(k - 1)]
            };
            let end_y = end_x - k - delta;
            let (mut x, mut y) = (end_x, end_y);
            while x > 0 && y > 0 && base[(x - 1) as usize] == target[(y - 1) as usize] {
                x -= 1;
                y -= 1;
            }
            reverse[at(k)] = x;
            if !odd && (k + delta).abs() <= d {
                let forward_x = forward[at(k + delta)];
                if forward_x >= x && forward_x - k - delta >= y {
                    return snake(x, y, end_x, end_y);
                }
            }
        }
    }

    // both searches always meet by d == half
    snake(0, 0, n, m)
}
fn snake(old_start: isize, new_start: isize, old_end: isize, new_end: isize) -> Snake {
    Snake {
        old_start: old_start as usize,
        new_start: new_start as usize,
        old_end: old_end as usize,
        new_end: new_end as usize,
    }
}
pub(crate) fn convert_changes_to_diff_ops(changes: &Changes) -> Vec<DiffOp> {
    let (old_len, new_len) = (changes.old.len(), changes.new.len());
    let (mut ops, mut bi, mut ti) = (Vec::with_capacity(old_len.max(new_len)), 0, 0);
    while bi < old_len || ti < new_len {
        if bi < old_len && ti < new_len && !changes.old[bi] && !changes.new[ti] {
            ops.push(DiffOp::Equal {
                old_start: bi,
                old_end: bi + 1,
                new_start: ti,
                new_end: ti + 1,
            });
            bi += 1;
            ti += 1;
            continue;
        }
        let (old_start, new_start) = (bi, ti);
        while bi < old_len && changes.old[bi] {
            bi += 1;
        }
        while ti < new_len && changes.new[ti] {
            ti += 1;
        }
        if bi == old_start && ti == new_start {
            break;
        }
        if bi > old_start {
            ops.push(DiffOp::Delete {
                old_start,
                old_end: bi,
            });
        }
        if ti > new_start {
            ops.push(DiffOp::Insert {
                new_start,
                new_end: ti,
            });
        }
    }
    coalesce_operations(&mut ops);
    ops
}
