//! Settings structures for the repository search service

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, read from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub github: GithubSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GITHUB_SEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("GITHUB_SEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("GITHUB_API_BASE_URL") {
            self.github.base_url = val;
        }
        if let Some(val) = var("GITHUB_API_TOKEN") {
            self.github.token = Some(val);
        }
        if let Some(val) = var("GITHUB_SEARCH_DATABASE_URL") {
            self.database.url = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// GitHub API client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// API root, e.g. `https://api.github.com`
    pub base_url: String,
    /// Personal access token sent as a bearer token when non-blank
    pub token: Option<String>,
    /// Accept header sent with every request
    pub accept: String,
    /// User agent (GitHub rejects requests without one)
    pub user_agent: String,
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Idle connections kept per host
    pub pool_maxsize: usize,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: None,
            accept: "application/vnd.github+json".to_string(),
            user_agent: format!("github-repo-search/{}", crate::VERSION),
            request_timeout: 10.0,
            pool_maxsize: 10,
        }
    }
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite connection URL
    pub url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite:github-search.db".to_string(),
            max_connections: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.github.base_url, "https://api.github.com");
        assert_eq!(settings.github.accept, "application/vnd.github+json");
        assert!(settings.github.token.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  port: 9000\ngithub:\n  token: abc123").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(settings.github.token.as_deref(), Some("abc123"));
        assert_eq!(settings.database.url, "sqlite:github-search.db");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("GITHUB_SEARCH_PORT", "9999"),
            ("GITHUB_API_TOKEN", "secret"),
            ("GITHUB_SEARCH_DATABASE_URL", "sqlite::memory:"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.server.port, 9999);
        assert_eq!(settings.github.token.as_deref(), Some("secret"));
        assert_eq!(settings.database.url, "sqlite::memory:");
        assert_eq!(settings.github.base_url, "https://api.github.com");
    }

    #[test]
    fn test_invalid_port_is_ignored() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| (key == "GITHUB_SEARCH_PORT").then(|| "nope".to_string()));
        assert_eq!(settings.server.port, 8080);
    }
}
