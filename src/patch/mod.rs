//! Unified-diff patch parsing for repolens.
//!
//! This module converts the raw patch text returned by GitHub's compare
//! endpoint into a structured, per-file, per-hunk representation suitable
//! for diff viewers, review tooling, and analytics.
//!
//! The parser is a pure function over its input:
//! - No I/O and no shared state; safe to call concurrently.
//! - It never fails. Malformed or truncated input degrades to best-effort
//!   partial structure, and empty input yields an empty result. Binary and
//!   oversized files arrive with no patch text at all and never reach it.
//! - It parses an already-produced diff; it does not compute, apply, or
//!   render diffs.

mod parser;
mod types;


// Re-export public API
pub use parser::{parse, parse_file_patch};
pub use types::{FileDiff, Hunk};
