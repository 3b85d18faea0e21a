//! Configuration for repolens.
//!
//! The resolved `Config` is passed explicitly into `GithubClient::new`;
//! there is no process-global state. Values resolve with the following
//! precedence, lowest to highest: config file, environment variables
//! (`GITHUB_API_BASE`, `GITHUB_TOKEN`), CLI flags.
//!
//! Unknown fields in the YAML file are ignored for forward compatibility.

use crate::error::{RepolensError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE: &str = "GITHUB_API_BASE";

/// Environment variable supplying the access token.
pub const ENV_TOKEN: &str = "GITHUB_TOKEN";

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

/// Configuration for the GitHub API collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the GitHub API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Personal access token. Unauthenticated requests work against the
    /// public API but hit a much lower rate limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Parsed configuration with defaults for absent fields
    /// * `Err(RepolensError::UserError)` - File unreadable or not valid YAML
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RepolensError::UserError(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            RepolensError::UserError(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Overlay `GITHUB_API_BASE` / `GITHUB_TOKEN` from the process
    /// environment. Empty values are treated as unset.
    pub fn with_env_overrides(self) -> Self {
        let api_base = std::env::var(ENV_API_BASE).ok();
        let token = std::env::var(ENV_TOKEN).ok();
        self.overlay(api_base, token)
    }

    /// Overlay explicit CLI flag values on top of everything else.
    pub fn with_cli_overrides(self, api_base: Option<String>, token: Option<String>) -> Self {
        self.overlay(api_base, token)
    }

    fn overlay(mut self, api_base: Option<String>, token: Option<String>) -> Self {
        if let Some(base) = api_base.filter(|v| !v.is_empty()) {
            self.api_base = base;
        }
        if let Some(token) = token.filter(|v| !v.is_empty()) {
            self.token = Some(token);
        }
        self
    }

    /// Resolve the effective configuration for a CLI invocation.
    ///
    /// Starts from the config file when one is given (defaults otherwise),
    /// then applies environment overrides, then CLI flag overrides.
    pub fn resolve(
        file: Option<&Path>,
        api_base: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let base = match file {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(base.with_env_overrides().with_cli_overrides(api_base, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn defaults_point_at_public_api() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.token, None);
        assert_eq!(config.timeout_secs, 20);
    }

    #[test]
    fn load_reads_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repolens.yaml");
        std::fs::write(
            &path,
            "api_base: https://github.example.com/api/v3\ntimeout_secs: 5\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api_base, "https://github.example.com/api/v3");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.token, None);
    }

    #[test]
    fn load_ignores_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repolens.yaml");
        std::fs::write(&path, "token: abc123\nfuture_setting: whatever\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.token, Some("abc123".to_string()));
    }

    #[test]
    fn load_rejects_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repolens.yaml");
        std::fs::write(&path, "api_base: [unclosed\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn overlay_prefers_later_values() {
        let config = Config::default()
            .overlay(Some("https://first.example".to_string()), None)
            .overlay(
                Some("https://second.example".to_string()),
                Some("tok".to_string()),
            );
        assert_eq!(config.api_base, "https://second.example");
        assert_eq!(config.token, Some("tok".to_string()));
    }

    #[test]
    fn overlay_ignores_empty_values() {
        let config = Config::default().overlay(Some(String::new()), Some(String::new()));
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.token, None);
    }

    #[test]
    fn cli_overrides_keep_file_values_when_absent() {
        let config = Config {
            api_base: "https://ghe.example/api/v3".to_string(),
            token: Some("file-token".to_string()),
            timeout_secs: 20,
        }
        .with_cli_overrides(None, None);
        assert_eq!(config.api_base, "https://ghe.example/api/v3");
        assert_eq!(config.token, Some("file-token".to_string()));
    }

    // Environment mutation is process-global, so these tests are serialized
    // and restore the variables they touch.

    #[test]
    #[serial]
    fn env_overrides_apply() {
        unsafe {
            std::env::set_var(ENV_API_BASE, "https://env.example/api");
            std::env::set_var(ENV_TOKEN, "env-token");
        }

        let config = Config::default().with_env_overrides();

        unsafe {
            std::env::remove_var(ENV_API_BASE);
            std::env::remove_var(ENV_TOKEN);
        }

        assert_eq!(config.api_base, "https://env.example/api");
        assert_eq!(config.token, Some("env-token".to_string()));
    }

    #[test]
    #[serial]
    fn cli_flags_beat_environment() {
        unsafe {
            std::env::set_var(ENV_API_BASE, "https://env.example/api");
        }

        let config = Config::resolve(None, Some("https://flag.example/api".to_string()), None)
            .unwrap();

        unsafe {
            std::env::remove_var(ENV_API_BASE);
        }

        assert_eq!(config.api_base, "https://flag.example/api");
    }
}
