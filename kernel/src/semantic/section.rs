//! Section start tracking.
//!
//! A section begins at the first line present in the new text after a
//! terminator (or at the start of the document) and ends at the next present
//! `!` line. Every record is labelled with the position of its section's
//! header so formatters can print the header as context above a change.

use crate::model::DiffLine;
use crate::syntax::is_terminator;

/// Assigns `section_start_position` to every record in one forward pass.
///
/// Deleted records never open or close a section; they inherit whatever
/// section is open, which is `None` inside a section deleted as a whole.
pub fn assign_section_starts(lines: &mut [DiffLine]) {
    let mut current: Option<usize> = None;
    for line in lines {
        if !line.is_present() {
            line.section_start_position = current;
            continue;
        }
        if is_terminator(&line.text) {
            line.section_start_position = current.or(line.position);
            current = None;
        } else {
            if current.is_none() {
                current = line.position;
            }
            line.section_start_position = current;
        }
    }
}
