//! Recognition of the few configuration keywords the semantic passes care about.
//!
//! Matching is purely textual: a line is classified by the prefix it starts
//! with once surrounding whitespace is trimmed.

/// Line that closes the current section.
pub const SECTION_TERMINATOR: &str = "!";

/// Prefix of a section header that opens an access control list.
pub const ACL_HEADER_PREFIX: &str = "ip access-list";

/// Keyword of a free-text comment inside an access list.
pub const REMARK_KEYWORD: &str = "remark";

const PERMIT_KEYWORD: &str = "permit";
const DENY_KEYWORD: &str = "deny";

/// Whether an access-list rule allows or blocks the traffic it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// `permit ...`
    Permit,
    /// `deny ...`
    Deny,
}

impl Polarity {
    /// Classifies a rule line, returning `None` for anything that is not a rule.
    #[must_use]
    pub fn of(text: &str) -> Option<Self> {
        if starts_with_keyword(text, PERMIT_KEYWORD) {
            Some(Self::Permit)
        } else if starts_with_keyword(text, DENY_KEYWORD) {
            Some(Self::Deny)
        } else {
            None
        }
    }
}

/// Returns true for the exact section terminator line.
#[must_use]
pub fn is_terminator(text: &str) -> bool {
    text == SECTION_TERMINATOR
}

/// Returns true for a line that is empty once whitespace is removed.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Returns true if the line is the header of an access list section.
#[must_use]
pub fn is_acl_header(text: &str) -> bool {
    text.trim().starts_with(ACL_HEADER_PREFIX)
}

/// Returns true if the line is an access-list remark.
#[must_use]
pub fn is_remark(text: &str) -> bool {
    starts_with_keyword(text, REMARK_KEYWORD)
}

fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    text.trim_start().starts_with(keyword)
}
