//! GitHub API collaborator for repolens.
//!
//! A thin blocking client over the REST and GraphQL endpoints. Only the
//! compare path is statically typed; every passthrough command returns the
//! upstream JSON body unmodified as a `serde_json::Value`. Upstream failures
//! are mapped onto the distinct repolens error kinds (not found, rate
//! limited, upstream, network) so callers and scripts can tell them apart.

mod client;
mod types;


// Re-export public API
pub use client::GithubClient;
pub(crate) use client::decode_body;
pub use types::{ChangedFile, Comparison, RepoRef};
