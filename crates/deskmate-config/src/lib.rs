// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Deskmate helpdesk engine.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides (including the legacy `GROK_*` credential variables), and
//! diagnostic error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use deskmate_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Assistant name: {}", config.agent.name);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::DeskmateConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to miette diagnostics with typo suggestions
pub fn load_and_validate() -> Result<DeskmateConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            // Read TOML source files for error source span information.
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<DeskmateConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string("deskmate.toml") {
        let path = std::env::current_dir()
            .map(|d| d.join("deskmate.toml").display().to_string())
            .unwrap_or_else(|_| "deskmate.toml".to_string());
        sources.push((path, content));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("deskmate/deskmate.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = std::path::Path::new("/etc/deskmate/deskmate.toml");
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_toml_passes_load_and_validate() {
        let config = load_and_validate_str(
            r#"
[agent]
name = "helpdesk"
default_language = "es"

[grok]
api_key = "xai-key"
timeout_secs = 10
"#,
        )
        .expect("should validate");
        assert_eq!(config.agent.default_language, "es");
        assert_eq!(config.grok.timeout_secs, 10);
    }

    #[test]
    fn unknown_key_yields_suggestion() {
        let errors = load_and_validate_str(
            r#"
[grok]
api_kye = "oops"
"#,
        )
        .expect_err("should reject unknown key");
        assert!(errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "api_key"
        )));
    }

    #[test]
    fn validation_errors_surface_through_entry_point() {
        let errors = load_and_validate_str(
            r#"
[agent]
log_level = "shouty"
"#,
        )
        .expect_err("should fail validation");
        assert!(errors.iter().any(
            |e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
        ));
    }
}
