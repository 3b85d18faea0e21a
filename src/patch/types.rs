//! Structured diff types produced by the patch parser.
//!
//! These are immutable value records built in one pass from the input text.
//! Serialized field names use the camelCase wire shape consumers of the
//! compare report expect.

use serde::{Deserialize, Serialize};

/// One parsed file entry from a multi-file patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Post-change file path, taken from the `diff --git` header's "b" side
    /// so renames report their new name. Falls back to the block's first
    /// line, then to `"unknown"`, when no header is present.
    pub filename: String,

    /// Hunks in order of appearance. Empty for rename/mode-change-only
    /// diffs, which carry a header but no `@@` sections.
    pub hunks: Vec<Hunk>,
}

/// One `@@ ... @@` section of a file diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hunk {
    /// First line of the range in the pre-change file. 1-based; 0 appears
    /// for empty files.
    pub old_start: usize,

    /// Declared length of the pre-change range. 1 when the header omits the
    /// comma group (unified-diff shorthand for a one-line range).
    pub old_lines: usize,

    /// First line of the range in the post-change file.
    pub new_start: usize,

    /// Declared length of the post-change range, defaulting like `old_lines`.
    pub new_lines: usize,

    /// Raw content lines, each retaining its leading `+`/`-`/space marker.
    /// Declared lengths are reported as-is and not validated against this
    /// list; classification is left to the consumer via the first character.
    pub lines: Vec<String>,
}
