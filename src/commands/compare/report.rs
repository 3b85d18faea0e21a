//! Compare report shaping.
//!
//! Merges the per-file metadata returned by the compare endpoint with the
//! parsed patch structure, one entry per changed file in upstream order. A
//! file whose patch is absent (binary, or over the API's diff size limit)
//! stays in the report with an empty parsed list; "no patch" is a normal
//! case, not a failure.

use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{RepolensError, Result};
use crate::github::{ChangedFile, Comparison};
use crate::patch::{self, FileDiff};

/// Comparison-level summary, mirroring the upstream fields.
#[derive(Debug, Clone, Serialize)]
pub struct CompareSummary {
    pub status: String,
    pub ahead_by: i64,
    pub behind_by: i64,
    pub total_commits: i64,
}

/// One changed file with its metadata and parsed patch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub filename: String,
    pub status: String,
    pub additions: u64,
    pub deletions: u64,
    pub changes: u64,

    /// Raw patch fragment exactly as returned upstream; null when absent.
    pub patch: Option<String>,

    /// Parsed structure for the fragment; empty when `patch` is null.
    pub parsed_patch: Vec<FileDiff>,
}

/// The full compare report printed by `repolens compare`.
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub summary: CompareSummary,

    /// The unmodified upstream comparison body, included with `--raw`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Value>,

    pub files: Vec<FileReport>,
}

/// Build the merged report from a fetched comparison.
pub fn build_report(comparison: Comparison, raw: Option<Value>) -> CompareReport {
    let summary = CompareSummary {
        status: comparison.status,
        ahead_by: comparison.ahead_by,
        behind_by: comparison.behind_by,
        total_commits: comparison.total_commits,
    };

    let files = comparison.files.into_iter().map(file_report).collect();

    CompareReport {
        summary,
        raw,
        files,
    }
}

fn file_report(file: ChangedFile) -> FileReport {
    let parsed_patch = match &file.patch {
        Some(fragment) => patch::parse_file_patch(&file.filename, fragment),
        None => Vec::new(),
    };

    FileReport {
        filename: file.filename,
        status: file.status,
        additions: file.additions,
        deletions: file.deletions,
        changes: file.changes,
        patch: file.patch,
        parsed_patch,
    }
}

/// Compile `--paths` patterns into a glob set. No patterns means no filter.
pub fn build_path_filter(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| {
            RepolensError::UserError(format!("invalid glob pattern '{pattern}': {e}"))
        })?;
        builder.add(glob);
    }

    let set = builder
        .build()
        .map_err(|e| RepolensError::UserError(format!("failed to build glob set: {e}")))?;
    Ok(Some(set))
}

/// Keep only the changed files whose name matches the filter.
pub fn filter_files(mut comparison: Comparison, filter: &GlobSet) -> Comparison {
    comparison
        .files
        .retain(|file| filter.is_match(&file.filename));
    comparison
}
