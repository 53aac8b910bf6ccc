//! Markup parsing for marten.
//!
//! # Scope
//!
//! This crate implements the whole parsing subsystem:
//! - **Source Cursor** ([`cursor::Cursor`])
//!   - peek/consume/rewind over a cached character buffer
//!   - line/column bookkeeping for diagnostics
//!   - single-slot checkpoint for rollback
//!   - scanning primitives (skip-while, skip-until, whitespace skipping)
//!
//! - **Tree Builder** ([`parser::MarkupParser`])
//!   - tag-name scanning with attribute-like content discarded
//!   - iterative, depth-bounded tree construction into an arena-indexed
//!     [`marten_dom::DocumentTree`]
//!   - sticky error state with checkpoint rollback on structural mismatch
//!
//! # Known Limitations
//!
//! - Attributes are recognized but deliberately discarded, not stored
//! - No entity/character-reference decoding
//! - No comment, CDATA, or doctype handling
//! - No self-closing-tag inference
//! - Input is parsed from a fully materialized buffer, not streamed

/// Source cursor with checkpoint/rollback and scanning primitives.
pub mod cursor;
/// Structural parse errors.
pub mod error;
/// Markup parser and tree construction.
pub mod parser;

pub use cursor::Cursor;
pub use error::ParseError;
pub use parser::{MAX_NESTING_DEPTH, MarkupParser, print_tree};
