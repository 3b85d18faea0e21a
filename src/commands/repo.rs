//! Repository passthrough commands.
//!
//! These commands mirror the upstream read-only endpoints one-to-one: fetch
//! a path, print the JSON body unmodified. Only `commits` does any local
//! work, normalizing the `--since`/`--until` values before they go upstream.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::cli::{CommitArgs, CommitsArgs, ReleasesArgs, RepoArgs};
use crate::commands::print_json;
use crate::error::{RepolensError, Result};
use crate::github::{GithubClient, RepoRef};

pub fn cmd_repo(client: &GithubClient, args: RepoArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    print_json(&client.get(&repo.api_path(), &[])?)
}

pub fn cmd_commits(client: &GithubClient, args: CommitsArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;

    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(sha) = args.sha {
        query.push(("sha", sha));
    }
    if let Some(path) = args.path {
        query.push(("path", path));
    }
    if let Some(author) = args.author {
        query.push(("author", author));
    }
    if let Some(since) = &args.since {
        query.push(("since", normalize_timestamp(since)?));
    }
    if let Some(until) = &args.until {
        query.push(("until", normalize_timestamp(until)?));
    }
    if let Some(per_page) = args.per_page {
        query.push(("per_page", per_page.to_string()));
    }
    if let Some(page) = args.page {
        query.push(("page", page.to_string()));
    }

    print_json(&client.get(&format!("{}/commits", repo.api_path()), &query)?)
}

pub fn cmd_commit(client: &GithubClient, args: CommitArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    print_json(&client.get(&format!("{}/commits/{}", repo.api_path(), args.sha), &[])?)
}

pub fn cmd_branches(client: &GithubClient, args: RepoArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    print_json(&client.get(&format!("{}/branches", repo.api_path()), &[])?)
}

pub fn cmd_tags(client: &GithubClient, args: RepoArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    print_json(&client.get(&format!("{}/tags", repo.api_path()), &[])?)
}

pub fn cmd_releases(client: &GithubClient, args: ReleasesArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    let path = if args.latest {
        format!("{}/releases/latest", repo.api_path())
    } else {
        format!("{}/releases", repo.api_path())
    };
    print_json(&client.get(&path, &[])?)
}

pub fn cmd_contributors(client: &GithubClient, args: RepoArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    print_json(&client.get(&format!("{}/contributors", repo.api_path()), &[])?)
}

/// Accept either an RFC 3339 timestamp or a plain `YYYY-MM-DD` date and
/// normalize to the RFC 3339 UTC form the commits endpoint expects.
fn normalize_timestamp(input: &str) -> Result<String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        return Ok(ts
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts.and_utc().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
    }

    Err(RepolensError::UserError(format!(
        "invalid time '{input}': expected RFC 3339 (2024-01-15T10:00:00Z) or YYYY-MM-DD"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_dates_become_utc_midnight() {
        assert_eq!(
            normalize_timestamp("2024-01-15").unwrap(),
            "2024-01-15T00:00:00Z"
        );
    }

    #[test]
    fn rfc3339_is_normalized_to_utc() {
        assert_eq!(
            normalize_timestamp("2024-01-15T10:30:00+02:00").unwrap(),
            "2024-01-15T08:30:00Z"
        );
        assert_eq!(
            normalize_timestamp("2024-01-15T10:30:00Z").unwrap(),
            "2024-01-15T10:30:00Z"
        );
    }

    #[test]
    fn garbage_times_are_rejected() {
        for input in ["yesterday", "15/01/2024", "2024-13-40", ""] {
            let err = normalize_timestamp(input).unwrap_err();
            assert!(err.to_string().contains("invalid time"));
        }
    }
}
