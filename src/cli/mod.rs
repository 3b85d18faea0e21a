//! CLI argument parsing for repolens.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Repolens: inspect GitHub repositories from the command line.
///
/// Fetches repository data from the GitHub API and prints it as JSON. The
/// `compare` command additionally parses every changed file's unified-diff
/// patch into structured hunks, and `parse` runs that parser over a local
/// patch file without touching the network.
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (api_base, token, timeout_secs).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// GitHub API base URL. Overrides the config file and GITHUB_API_BASE.
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    /// Access token. Overrides the config file and GITHUB_TOKEN.
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for repolens.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show repository metadata.
    Repo(RepoArgs),

    /// List commits, newest first.
    ///
    /// Supports the upstream filters: branch/SHA, path, author, time range,
    /// and pagination.
    Commits(CommitsArgs),

    /// Show a single commit by SHA.
    Commit(CommitArgs),

    /// Compare two commits, branches, or tags.
    ///
    /// Fetches the comparison, parses every changed file's patch into
    /// structured hunks, and prints the merged report: summary, per-file
    /// metadata, raw patch, and parsed hunks.
    Compare(CompareArgs),

    /// List branches.
    Branches(RepoArgs),

    /// List tags.
    Tags(RepoArgs),

    /// List releases (or only the latest with --latest).
    Releases(ReleasesArgs),

    /// List contributors.
    Contributors(RepoArgs),

    /// GET an arbitrary API path and print the JSON response verbatim.
    ///
    /// Covers every read-only endpoint without a dedicated subcommand,
    /// e.g. `repolens api /repos/rust-lang/regex/git/trees/master`.
    Api(ApiArgs),

    /// Run a GraphQL query against the API.
    Graphql(GraphqlArgs),

    /// Parse a local unified-diff patch file into structured hunks.
    ///
    /// Works entirely offline; pass `-` to read the patch from stdin.
    Parse(ParseArgs),
}

/// Arguments for commands that only need a repository.
#[derive(Parser, Debug)]
pub struct RepoArgs {
    /// Repository in owner/name form (e.g. rust-lang/regex).
    pub repo: String,
}

/// Arguments for the `commits` command.
#[derive(Parser, Debug)]
pub struct CommitsArgs {
    /// Repository in owner/name form.
    pub repo: String,

    /// Branch, tag, or SHA to start listing from.
    #[arg(long)]
    pub sha: Option<String>,

    /// Only commits touching this path.
    #[arg(long)]
    pub path: Option<String>,

    /// Only commits by this author (login or email).
    #[arg(long)]
    pub author: Option<String>,

    /// Only commits after this time (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub since: Option<String>,

    /// Only commits before this time (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub until: Option<String>,

    /// Items per page (upstream maximum 100).
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Page number.
    #[arg(long)]
    pub page: Option<u32>,
}

/// Arguments for the `commit` command.
#[derive(Parser, Debug)]
pub struct CommitArgs {
    /// Repository in owner/name form.
    pub repo: String,

    /// Commit SHA (full or abbreviated), branch, or tag.
    pub sha: String,
}

/// Arguments for the `compare` command.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Repository in owner/name form.
    pub repo: String,

    /// Base commit, branch, or tag.
    pub base: String,

    /// Head commit, branch, or tag.
    pub head: String,

    /// Only report files matching these glob patterns.
    #[arg(long, value_delimiter = ',')]
    pub paths: Vec<String>,

    /// Include the unmodified upstream comparison body in the output.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `releases` command.
#[derive(Parser, Debug)]
pub struct ReleasesArgs {
    /// Repository in owner/name form.
    pub repo: String,

    /// Show only the latest release.
    #[arg(long)]
    pub latest: bool,
}

/// Arguments for the `api` command.
#[derive(Parser, Debug)]
pub struct ApiArgs {
    /// API path, e.g. /repos/rust-lang/regex/readme.
    pub path: String,

    /// Query parameter in key=value form; repeatable.
    #[arg(long = "query", value_name = "KEY=VALUE")]
    pub query: Vec<String>,
}

/// Arguments for the `graphql` command.
#[derive(Parser, Debug)]
pub struct GraphqlArgs {
    /// Inline GraphQL query text.
    pub query: Option<String>,

    /// Read the query from a file instead.
    #[arg(long, value_name = "FILE", conflicts_with = "query")]
    pub file: Option<PathBuf>,

    /// Query variables as a JSON object.
    #[arg(long, value_name = "JSON")]
    pub variables: Option<String>,
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Patch file to parse, or - for stdin.
    pub file: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
