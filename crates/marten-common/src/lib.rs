//! Common utilities for the marten markup parser.
//!
//! This crate provides shared infrastructure used by the other components:
//! - **Warning System** - colored terminal output for parse diagnostics

pub mod warning;
