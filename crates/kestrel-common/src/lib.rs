//! Common utilities for the Kestrel tools.
//!
//! This crate provides shared infrastructure used by the CSS crate and the CLI:
//! - **Warning System** - colored terminal output for skipped or suspicious input

pub mod warning;
