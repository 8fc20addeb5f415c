//! Build-time Configuration
//!
//! Trunk forwards the build environment, so settings are read with
//! `option_env!` and baked into the bundle.

use log::LevelFilter;

pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub users_endpoint: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_endpoint: DEFAULT_USERS_ENDPOINT.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// `USER_DIRECTORY_ENDPOINT` and `USER_DIRECTORY_LOG` at build time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("USER_DIRECTORY_ENDPOINT"),
            option_env!("USER_DIRECTORY_LOG"),
        )
    }

    fn from_values(endpoint: Option<&str>, level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            users_endpoint: endpoint
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.users_endpoint),
            log_level: level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.users_endpoint, DEFAULT_USERS_ENDPOINT);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("http://localhost:3000/users"), Some("debug"));
        assert_eq!(config.users_endpoint, "http://localhost:3000/users");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_or_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
