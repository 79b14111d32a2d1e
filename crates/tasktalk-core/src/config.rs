//! Client configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

/// Configuration for the chat client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the task-assistant backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// The acting user's id.
    #[serde(default)]
    pub user_id: i64,
    /// Bearer token for the backend, if it requires authentication.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: 0,
            auth_token: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Parses a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.auth_token, None);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ChatConfig::from_toml_str(
            r#"
            base_url = "https://tasks.example.com"
            user_id = 42
            auth_token = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://tasks.example.com");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout_secs, 60);
    }
}
