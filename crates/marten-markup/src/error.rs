//! Parse error taxonomy.
//!
//! Errors here are structural: the input contradicted the element nesting
//! the parser had committed to. There is no recovery; once one of these is
//! recorded the remainder of the parse is abandoned, though the partially
//! built tree stays in place.

use thiserror::Error;

/// A structural failure detected while building the document tree.
///
/// Line numbers are 1-based and columns 0-based, matching the cursor's
/// diagnostic accessors. The position always refers to the cursor after it
/// was rolled back to the last checkpoint, which points near the offending
/// tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A closing tag's name differs from the name of the element currently
    /// being closed.
    #[error("syntax error on line {line}:{column}: closing tag </{found}> does not match <{expected}>")]
    TagMismatch {
        /// Tag name of the element that was open.
        expected: String,
        /// Tag name the closing tag actually carried.
        found: String,
        /// 1-based line near the offending tag.
        line: usize,
        /// 0-based column near the offending tag.
        column: usize,
    },

    /// Input ended while an element was still open.
    #[error("unexpected end of input on line {line}:{column}: element <{tag}> was never closed")]
    UnterminatedElement {
        /// Tag name of the innermost element left open.
        tag: String,
        /// 1-based line at the point of failure.
        line: usize,
        /// 0-based column at the point of failure.
        column: usize,
    },

    /// Element nesting exceeded the builder's deterministic depth limit.
    #[error("markup nested deeper than {limit} levels on line {line}:{column}")]
    NestingTooDeep {
        /// The depth limit that was exceeded.
        limit: usize,
        /// 1-based line of the tag that exceeded the limit.
        line: usize,
        /// 0-based column of the tag that exceeded the limit.
        column: usize,
    },
}

impl ParseError {
    /// The distinct negative status code for this error kind.
    ///
    /// 0 is reserved for the clean state; every kind maps to its own
    /// non-zero value so callers that thread plain codes around can still
    /// tell them apart.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            ParseError::TagMismatch { .. } => -2,
            ParseError::UnterminatedElement { .. } => -3,
            ParseError::NestingTooDeep { .. } => -4,
        }
    }

    /// 1-based line of the diagnostic.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            ParseError::TagMismatch { line, .. }
            | ParseError::UnterminatedElement { line, .. }
            | ParseError::NestingTooDeep { line, .. } => *line,
        }
    }

    /// 0-based column of the diagnostic.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            ParseError::TagMismatch { column, .. }
            | ParseError::UnterminatedElement { column, .. }
            | ParseError::NestingTooDeep { column, .. } => *column,
        }
    }
}
