//! Markup parser module for tree construction.

/// Markup parser implementation.
pub mod core;

pub use self::core::{MAX_NESTING_DEPTH, MarkupParser, print_tree};
