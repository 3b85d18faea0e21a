//! Command implementations for repolens.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command fetches (or, for `parse`, reads) its data,
//! then prints a JSON document to stdout; errors propagate to `main` where
//! they map to exit codes.

mod api;
mod compare;
mod parse;
mod repo;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::{RepolensError, Result};
use crate::github::GithubClient;
use serde::Serialize;

/// Dispatch a command to its implementation.
///
/// The `parse` command is fully offline; every other command resolves the
/// effective configuration and talks to the API through one client.
pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        api_base,
        token,
        command,
    } = cli;

    if let Command::Parse(args) = command {
        return parse::cmd_parse(args);
    }

    let config = Config::resolve(config_path.as_deref(), api_base, token)?;
    let client = GithubClient::new(&config)?;

    match command {
        Command::Repo(args) => repo::cmd_repo(&client, args),
        Command::Commits(args) => repo::cmd_commits(&client, args),
        Command::Commit(args) => repo::cmd_commit(&client, args),
        Command::Compare(args) => compare::cmd_compare(&client, args),
        Command::Branches(args) => repo::cmd_branches(&client, args),
        Command::Tags(args) => repo::cmd_tags(&client, args),
        Command::Releases(args) => repo::cmd_releases(&client, args),
        Command::Contributors(args) => repo::cmd_contributors(&client, args),
        Command::Api(args) => api::cmd_api(&client, args),
        Command::Graphql(args) => api::cmd_graphql(&client, args),
        // Handled above, before the client was built.
        Command::Parse(_) => Ok(()),
    }
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| RepolensError::UserError(format!("failed to render output: {e}")))?;
    println!("{rendered}");
    Ok(())
}
