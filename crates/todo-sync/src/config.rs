//! Configuration
//!
//! Endpoint location and owner id, baked in at compile time.

use std::time::Duration;

/// How long an error banner stays visible
pub const ERROR_HIDE_DELAY: Duration = Duration::from_secs(3);

const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";
const DEFAULT_USER_ID: u32 = 2039;

/// Where the todos collection lives and whose todos we manage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, without the `/todos` resource path
    pub base_url: String,
    /// Owner id sent with every request
    pub user_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
        }
    }
}

impl ApiConfig {
    /// Build from `TODOS_API_URL` / `TODOS_USER_ID` set at build time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODOS_API_URL"), option_env!("TODOS_USER_ID"))
    }

    fn from_values(base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let defaults = Self::default();

        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let user_id = match user_id.map(str::trim) {
            Some(raw) => raw.parse::<u32>().unwrap_or_else(|err| {
                tracing::warn!(value = raw, error = %err, "invalid TODOS_USER_ID, using default");
                defaults.user_id
            }),
            None => defaults.user_id,
        };

        Self { base_url, user_id }
    }

    /// URL of the todos collection
    pub fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url.trim_end_matches('/'))
    }

    /// URL of a single todo
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.user_id, 2039);
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_values(Some("http://localhost:3000/"), Some("7"));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.user_id, 7);
    }

    #[test]
    fn test_bad_user_id_falls_back() {
        let config = ApiConfig::from_values(Some(""), Some("abc"));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_urls() {
        let config = ApiConfig::from_values(Some("http://api.test"), None);
        assert_eq!(config.collection_url(), "http://api.test/todos");
        assert_eq!(config.item_url(12), "http://api.test/todos/12");
    }
}
