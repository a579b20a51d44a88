//! Semantic shifting of changed blocks.
//!
//! A line diff is free to report a run of inserted or deleted lines at any
//! offset where the surrounding text repeats. For configuration text the
//! natural choice is the one that keeps whole sections together, so each
//! block is slid to the lossless offset whose boundaries look most like
//! section boundaries.

use std::cmp::Reverse;

use tracing::debug;

use crate::model::{ChangeKind, DiffLine, DiffModel};
use crate::syntax::{is_blank, is_terminator};

/// One lossless placement of a changed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCandidate<'a> {
    /// Offset relative to the current placement, negative is towards the top.
    pub shift_amount: isize,
    /// Line right above the shifted block, if any.
    pub preceding_text: Option<&'a str>,
    /// First line of the shifted block.
    pub first_text: &'a str,
    /// Last line of the shifted block.
    pub last_text: &'a str,
    /// Line right below the shifted block, if any.
    pub following_text: Option<&'a str>,
}

impl ShiftCandidate<'_> {
    /// How much this placement looks like a whole section; higher is better.
    ///
    /// Ending on `!` and starting on a blank line are rewarded, starting on `!`
    /// is penalized, and touching either end of the document is rewarded.
    #[must_use]
    pub fn score(&self) -> i32 {
        let mut score = 0;
        if is_terminator(self.last_text) {
            score += 1;
        }
        if is_terminator(self.first_text) {
            score -= 1;
        }
        if is_blank(self.first_text) {
            score += 1;
        }
        if self.preceding_text.is_none() || self.following_text.is_none() {
            score += 1;
        }
        score
    }
}

/// Maximal run of inserted-only or deleted-only lines with context on both sides.
#[derive(Debug, Clone, Copy)]
struct ChangedBlock {
    start: usize,
    end: usize,
    kind: ChangeKind,
}

impl ChangedBlock {
    fn starting_at(lines: &[DiffLine], start: usize) -> Option<Self> {
        let kind = lines[start].kind;
        if !matches!(kind, ChangeKind::Inserted | ChangeKind::Deleted)
            || !lines[start - 1].kind.is_context()
        {
            return None;
        }
        let mut end = start;
        while end + 1 < lines.len() && lines[end + 1].kind == kind {
            end += 1;
        }
        let bounded = end + 1 < lines.len() && lines[end + 1].kind.is_context();
        bounded.then_some(Self { start, end, kind })
    }

    fn len(self) -> usize {
        self.end - self.start + 1
    }

    fn candidate(self, lines: &[DiffLine], shift: isize) -> ShiftCandidate<'_> {
        let start = self.start.saturating_add_signed(shift);
        let end = self.end.saturating_add_signed(shift);
        ShiftCandidate {
            shift_amount: shift,
            preceding_text: start.checked_sub(1).map(|i| lines[i].text.as_str()),
            first_text: &lines[start].text,
            last_text: &lines[end].text,
            following_text: lines.get(end + 1).map(|line| line.text.as_str()),
        }
    }

    /// Every offset at which the block can sit without changing either text.
    ///
    /// Moving one step up pulls in the line above and pushes out the block's
    /// current last line, so both must read the same. Lines pulled in must be
    /// positioned context lines.
    fn valid_shifts(self, lines: &[DiffLine]) -> Vec<isize> {
        let mut shifts = vec![0];

        let mut step = 1;
        while step <= self.start
            && is_anchor(&lines[self.start - step])
            && lines[self.start - step].text == lines[self.end + 1 - step].text
        {
            shifts.push(-(step as isize));
            step += 1;
        }

        let mut step = 1;
        while self.end + step < lines.len()
            && is_anchor(&lines[self.end + step])
            && lines[self.start + step - 1].text == lines[self.end + step].text
        {
            shifts.push(step as isize);
            step += 1;
        }

        shifts
    }

    fn best_shift(self, lines: &[DiffLine]) -> (isize, i32) {
        self.valid_shifts(lines)
            .into_iter()
            .map(|shift| (shift, self.candidate(lines, shift).score()))
            .min_by_key(|&(shift, score)| (Reverse(score), shift.unsigned_abs(), shift))
            .unwrap_or((0, 0))
    }

    fn apply(self, lines: &mut [DiffLine], shift: isize) {
        let new_start = self.start.saturating_add_signed(shift);
        let new_end = self.end.saturating_add_signed(shift);
        let range = self.start.min(new_start)..=self.end.max(new_end);
        let lo = *range.start();

        let positions: Vec<usize> = lines[range.clone()]
            .iter()
            .filter_map(|line| line.position)
            .collect();

        for (offset, line) in lines[range.clone()].iter_mut().enumerate() {
            if (new_start..=new_end).contains(&(lo + offset)) {
                line.kind = self.kind;
            } else if line.kind == self.kind {
                line.kind = ChangeKind::Unchanged;
            }
        }

        let mut positions = positions.into_iter();
        for line in &mut lines[range] {
            line.position = if line.kind == ChangeKind::Deleted {
                None
            } else {
                positions.next()
            };
        }
    }
}

fn is_anchor(line: &DiffLine) -> bool {
    line.kind.is_context() && line.position.is_some()
}

/// Slides every changed block of `model` to its best lossless placement.
///
/// Scans left to right and repeats the scan until it moves nothing, so a
/// second call never changes the model. Returns the number of moves. Record
/// count, texts and order never change; only kinds and positions do.
pub fn perform_semantic_shifts(model: &mut DiffModel) -> usize {
    let lines = model.lines.as_mut_slice();
    let mut moved = 0;
    loop {
        // a move can join blocks, and the joined block may move again
        let pass = shift_pass(lines);
        if pass == 0 {
            return moved;
        }
        moved += pass;
    }
}

fn shift_pass(lines: &mut [DiffLine]) -> usize {
    let mut moved = 0;
    let mut start = 1;

    while start + 1 < lines.len() {
        let Some(block) = ChangedBlock::starting_at(lines, start) else {
            start += 1;
            continue;
        };

        let (shift, score) = block.best_shift(lines);
        if shift != 0 {
            block.apply(lines, shift);
            moved += 1;
            debug!(
                start = block.start,
                len = block.len(),
                kind = %block.kind,
                shift,
                score,
                "shifted changed block"
            );
        }
        start = block.end.max(block.end.saturating_add_signed(shift)) + 1;
    }

    moved
}
