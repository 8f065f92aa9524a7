//! Error types for the lexer.
//!
//! - `Error` carries the start/end position snapshots of the failure
//! - `ErrorImpl` lists the failure kinds
//! - `Display` renders the two-line message shown to users

pub mod errors;
