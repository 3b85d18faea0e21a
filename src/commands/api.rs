//! Generic passthrough commands: `api` and `graphql`.
//!
//! Bodies stay untyped end to end; repolens adds nothing and removes
//! nothing from what the upstream API returns.

use serde_json::Value;

use crate::cli::{ApiArgs, GraphqlArgs};
use crate::commands::print_json;
use crate::error::{RepolensError, Result};
use crate::github::GithubClient;

pub fn cmd_api(client: &GithubClient, args: ApiArgs) -> Result<()> {
    let path = if args.path.starts_with('/') {
        args.path.clone()
    } else {
        format!("/{}", args.path)
    };
    let query = parse_query_params(&args.query)?;

    print_json(&client.get(&path, &query)?)
}

pub fn cmd_graphql(client: &GithubClient, args: GraphqlArgs) -> Result<()> {
    let query = match (args.query, args.file) {
        (Some(query), None) => query,
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            RepolensError::UserError(format!(
                "failed to read query file {}: {}",
                path.display(),
                e
            ))
        })?,
        // clap rejects passing both; nothing at all is a usage error here.
        _ => {
            return Err(RepolensError::UserError(
                "a GraphQL query is required: pass it inline or via --file".to_string(),
            ));
        }
    };

    let variables = match &args.variables {
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            RepolensError::UserError(format!("invalid JSON in --variables: {e}"))
        })?,
        None => Value::Object(Default::default()),
    };

    print_json(&client.graphql(&query, variables)?)
}

/// Parse repeated `key=value` pairs into query parameters.
fn parse_query_params(pairs: &[String]) -> Result<Vec<(&str, String)>> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key, value.to_string()))
                .ok_or_else(|| {
                    RepolensError::UserError(format!(
                        "invalid query parameter '{pair}': expected key=value"
                    ))
                })
        })
        .collect()
}
