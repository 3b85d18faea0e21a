//! The `compare` command: fetch a comparison and parse every file's patch.
//!
//! This is the pipeline the rest of the tool exists for: compare endpoint →
//! patch parser → merged per-file report.

mod report;

#[cfg(test)]
mod tests;

use crate::cli::CompareArgs;
use crate::commands::print_json;
use crate::error::Result;
use crate::github::{Comparison, GithubClient, RepoRef, decode_body};
use report::{build_path_filter, build_report, filter_files};

pub fn cmd_compare(client: &GithubClient, args: CompareArgs) -> Result<()> {
    let repo = RepoRef::parse(&args.repo)?;
    let filter = build_path_filter(&args.paths)?;

    let path = format!("{}/compare/{}...{}", repo.api_path(), args.base, args.head);
    let (comparison, raw_body) = if args.raw {
        // Keep the unmodified upstream body next to the typed view.
        let value = client.get(&path, &[])?;
        (decode_body::<Comparison>(value.clone())?, Some(value))
    } else {
        (client.get_as::<Comparison>(&path, &[])?, None)
    };

    let comparison = match &filter {
        Some(set) => filter_files(comparison, set),
        None => comparison,
    };

    print_json(&build_report(comparison, raw_body))
}
