//! Core patch parsing logic.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{FileDiff, Hunk};

/// Start of a per-file diff block, anchored to a line boundary.
static FILE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^diff --git ").expect("file marker pattern must compile")
});

/// Single-parent unified-diff hunk header. Combined diffs for merge commits
/// use a three-range `@@@` form and are intentionally not matched; such
/// blocks parse to zero hunks.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@")
        .expect("hunk header pattern must compile")
});

/// Parse concatenated multi-file patch text into per-file diff records.
///
/// Empty input yields an empty list; patch text is legitimately absent for
/// binary files and oversized diffs, and callers treat that as a normal
/// zero-hunk case. Malformed input never errors: a block without a
/// recognizable header still produces a `FileDiff` via the fallback
/// filename rule.
pub fn parse(patch_text: &str) -> Vec<FileDiff> {
    if patch_text.is_empty() {
        return Vec::new();
    }

    split_file_blocks(patch_text)
        .into_iter()
        .map(parse_block)
        .collect()
}

/// Parse a single file's patch fragment as returned by the compare endpoint.
///
/// The API supplies hunk bodies without the `diff --git` header line, so one
/// is synthesized from the filename unless the fragment already carries its
/// own.
pub fn parse_file_patch(filename: &str, patch: &str) -> Vec<FileDiff> {
    if patch.starts_with("diff --git ") {
        parse(patch)
    } else {
        parse(&format!("diff --git a/{filename} b/{filename}\n{patch}"))
    }
}

/// Split patch text into per-file blocks.
///
/// A new block starts at every `diff --git ` marker found at the beginning
/// of a line; the newline separating two blocks belongs to neither. Text
/// before the first marker forms its own block so nothing is dropped.
fn split_file_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;

    for marker in FILE_MARKER.find_iter(text) {
        if marker.start() == 0 {
            continue;
        }
        // The character before a line-anchored match is always '\n'.
        blocks.push(&text[start..marker.start() - 1]);
        start = marker.start();
    }
    blocks.push(&text[start..]);

    blocks
}

fn parse_block(block: &str) -> FileDiff {
    FileDiff {
        filename: block_filename(block),
        hunks: parse_hunks(block),
    }
}

/// Resolve a block's filename from its `diff --git a/<old> b/<new>` header.
///
/// The post-change ("b") path is used so renames report their new name and
/// ordinary edits their only name. A block without a recognizable header
/// falls back to its first line verbatim, and an empty block to `"unknown"`.
fn block_filename(block: &str) -> String {
    let first_line = block.lines().next().unwrap_or("");

    if let Some(rest) = first_line.trim_start().strip_prefix("diff --git a/") {
        // Paths may contain spaces; the last " b/" is the side separator.
        if let Some(b_pos) = rest.rfind(" b/") {
            return rest[b_pos + 3..].to_string();
        }
    }

    if first_line.is_empty() {
        "unknown".to_string()
    } else {
        first_line.to_string()
    }
}

/// Extract all hunks of one file block, in source order.
///
/// Each hunk's body spans from just after its own header match to just
/// before the next header's start (or the end of the block), so content
/// never bleeds into the following hunk.
fn parse_hunks(block: &str) -> Vec<Hunk> {
    let mut found: Vec<(usize, usize, Hunk)> = Vec::new();

    for caps in HUNK_HEADER.captures_iter(block) {
        let Some(header) = caps.get(0) else { continue };
        let hunk = Hunk {
            old_start: parse_count(caps.get(1), 0),
            old_lines: parse_count(caps.get(2), 1),
            new_start: parse_count(caps.get(3), 0),
            new_lines: parse_count(caps.get(4), 1),
            lines: Vec::new(),
        };
        found.push((header.start(), header.end(), hunk));
    }

    let mut hunks = Vec::with_capacity(found.len());
    for i in 0..found.len() {
        let body_start = found[i].1;
        let body_end = found.get(i + 1).map_or(block.len(), |next| next.0);
        let mut hunk = found[i].2.clone();
        hunk.lines = body_lines(&block[body_start..body_end]);
        hunks.push(hunk);
    }

    hunks
}

fn parse_count(group: Option<regex::Match<'_>>, default: usize) -> usize {
    group
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(default)
}

/// Split a hunk body into its content lines.
///
/// Lines keep their unified-diff marker character. A trailing `\r` is
/// stripped so CRLF patches parse identically to LF ones, and the empty
/// strings the split leaves behind are dropped. Genuinely blank context
/// lines keep their leading space marker and therefore survive the filter,
/// as does the `\ No newline at end of file` marker line.
fn body_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
