//! Splitting configuration text into comparable chunks.
//!
//! A chunk is one line plus the header of the section it belongs to. Plain
//! line chunking leaves the section empty; section-preserving chunking tags
//! each line so that identical lines in different sections never compare
//! equal.

use crate::syntax::is_terminator;

/// One line of input together with its section tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The line, without its terminator.
    pub text: &'a str,
    /// Header of the enclosing section, or empty.
    pub section: &'a str,
}

impl<'a> Chunk<'a> {
    /// Creates a chunk.
    #[must_use]
    pub const fn new(text: &'a str, section: &'a str) -> Self {
        Self { text, section }
    }
}

/// Splits text into chunks for the base differ.
pub trait Chunker: Send + Sync {
    /// Splits `text` into chunks, one per line.
    fn chunk<'a>(&self, text: &'a str) -> Vec<Chunk<'a>>;
}

/// Chunks without section information.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChunker;

impl Chunker for LineChunker {
    fn chunk<'a>(&self, text: &'a str) -> Vec<Chunk<'a>> {
        split_lines(text)
            .into_iter()
            .map(|line| Chunk::new(line, ""))
            .collect()
    }
}

/// Chunks tagged with the header of their section.
///
/// The first line seen while no section is open becomes the header. A `!`
/// line is tagged with the section it closes and then resets tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionPreservingChunker;

impl Chunker for SectionPreservingChunker {
    fn chunk<'a>(&self, text: &'a str) -> Vec<Chunk<'a>> {
        let mut section: Option<&'a str> = None;
        split_lines(text)
            .into_iter()
            .map(|line| {
                if is_terminator(line) {
                    Chunk::new(line, section.take().unwrap_or_default())
                } else {
                    Chunk::new(line, *section.get_or_insert(line))
                }
            })
            .collect()
    }
}

/// Splits on `\r\n`, `\r` and `\n` alike.
///
/// A trailing line terminator yields a trailing empty line, and empty input
/// yields a single empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(index) = rest.find(['\r', '\n']) {
        lines.push(&rest[..index]);
        let skip = if rest[index..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[index + skip..];
    }
    lines.push(rest);
    lines
}
