// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. All failures are collected before returning (no fail-fast).

use std::str::FromStr;

use deskmate_core::Language;

use crate::diagnostic::ConfigError;
use crate::model::DeskmateConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
pub fn validate_config(config: &DeskmateConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.agent.log_level
            ),
        });
    }

    // The default language must be a member of the closed language set;
    // `Language::from_code` would silently normalize, so parse strictly here.
    if Language::from_str(&config.agent.default_language).is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.default_language `{}` is not a supported language code",
                config.agent.default_language
            ),
        });
    }

    if config.grok.api_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "grok.api_url must not be empty".to_string(),
        });
    } else if !config.grok.api_url.starts_with("http://")
        && !config.grok.api_url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "grok.api_url must start with http:// or https://, got `{}`",
                config.grok.api_url
            ),
        });
    }

    if config.grok.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "grok.timeout_secs must be at least 1".to_string(),
        });
    }

    if config.grok.history_window == 0 {
        errors.push(ConfigError::Validation {
            message: "grok.history_window must be at least 1".to_string(),
        });
    }

    for (key, value) in [
        ("data.users_path", &config.data.users_path),
        ("data.tickets_path", &config.data.tickets_path),
        ("data.keyword_steps_path", &config.data.keyword_steps_path),
    ] {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = DeskmateConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn bad_log_level_fails_validation() {
        let mut config = DeskmateConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }

    #[test]
    fn unsupported_default_language_fails_validation() {
        let mut config = DeskmateConfig::default();
        config.agent.default_language = "tlh".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("default_language"))
        ));
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let mut config = DeskmateConfig::default();
        config.grok.timeout_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("timeout_secs"))
        ));
    }

    #[test]
    fn non_http_api_url_fails_validation() {
        let mut config = DeskmateConfig::default();
        config.grok.api_url = "ftp://api.x.ai".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("api_url"))
        ));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = DeskmateConfig::default();
        config.agent.name = "".to_string();
        config.agent.log_level = "loud".to_string();
        config.grok.history_window = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
