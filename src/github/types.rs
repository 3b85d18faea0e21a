//! Typed request/response shapes for the GitHub API.
//!
//! Deliberately minimal: only the fields the compare pipeline touches are
//! modeled. Unknown fields are ignored on deserialization, and routes that
//! merely relay upstream JSON never pass through these types at all.

use crate::error::{RepolensError, Result};
use serde::{Deserialize, Serialize};

/// A repository address in `owner/name` form, as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse an `owner/name` argument.
    pub fn parse(input: &str) -> Result<Self> {
        match input.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(RepolensError::UserError(format!(
                "invalid repository '{input}': expected the owner/name form, e.g. rust-lang/regex"
            ))),
        }
    }

    /// REST path prefix for this repository.
    pub fn api_path(&self) -> String {
        format!("/repos/{}/{}", self.owner, self.name)
    }
}

/// Response body of `GET /repos/{owner}/{repo}/compare/{base}...{head}`.
#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    /// Relationship of head to base: "ahead", "behind", "identical", or
    /// "diverged".
    pub status: String,
    pub ahead_by: i64,
    pub behind_by: i64,
    pub total_commits: i64,

    /// Changed files in upstream order. Defaults to empty; the API omits the
    /// list for some comparisons.
    #[serde(default)]
    pub files: Vec<ChangedFile>,
}

/// One changed file in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    /// Change kind as reported upstream: "added", "removed", "modified",
    /// "renamed", ...
    pub status: String,
    pub additions: u64,
    pub deletions: u64,
    pub changes: u64,

    /// Unified-diff fragment without the `diff --git` header line. Absent
    /// for binary files and for diffs above the API's size threshold.
    #[serde(default)]
    pub patch: Option<String>,
}

#[cfg(test)]
mod repo_ref_tests {
    use super::*;

    #[test]
    fn parses_owner_and_name() {
        let repo = RepoRef::parse("rust-lang/regex").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "regex");
        assert_eq!(repo.api_path(), "/repos/rust-lang/regex");
    }

    #[test]
    fn rejects_malformed_references() {
        for input in ["", "just-owner", "/name", "owner/", "a/b/c"] {
            let err = RepoRef::parse(input).unwrap_err();
            assert!(err.to_string().contains("expected the owner/name form"));
        }
    }
}
