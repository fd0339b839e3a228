// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./deskmate.toml` > `~/.config/deskmate/deskmate.toml`
//! > `/etc/deskmate/deskmate.toml`, with environment overrides via the
//! `DESKMATE_` prefix plus the legacy `GROK_*` credential variables.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::DeskmateConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/deskmate/deskmate.toml` (system-wide)
/// 3. `~/.config/deskmate/deskmate.toml` (user XDG config)
/// 4. `./deskmate.toml` (local directory)
/// 5. `GROK_*` credential variables
/// 6. `DESKMATE_*` environment variables
pub fn load_config() -> Result<DeskmateConfig, figment::Error> {
    base_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<DeskmateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DeskmateConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DeskmateConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DeskmateConfig::default()))
        .merge(Toml::file(path))
        .merge(grok_env_provider())
        .merge(env_provider())
        .extract()
}

fn base_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DeskmateConfig::default()))
        .merge(Toml::file("/etc/deskmate/deskmate.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("deskmate/deskmate.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("deskmate.toml"))
        .merge(grok_env_provider())
        .merge(env_provider())
}

/// Create the `DESKMATE_` environment variable provider.
///
/// Uses explicit `map()` rather than `Env::split("_")` to avoid ambiguity
/// with underscore-containing key names: `DESKMATE_GROK_API_KEY` must map
/// to `grok.api_key`, not `grok.api.key`.
fn env_provider() -> Env {
    Env::prefixed("DESKMATE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("grok_", "grok.", 1)
            .replacen("data_", "data.", 1);
        mapped.into()
    })
}

/// Map the legacy `GROK_*` credential variables into the `[grok]` section.
///
/// `GROK_API_KEY`, `GROK_API_URL`, `GROK_MODEL`, and `GROK_ORG_ID` are the
/// names integrators already export; they take effect without a config file.
fn grok_env_provider() -> Env {
    Env::prefixed("GROK_").map(|key| format!("grok.{}", key.as_str()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_load_without_any_file() {
        let config = load_config_from_str("").expect("defaults should load");
        assert_eq!(config.agent.name, "deskmate");
        assert_eq!(config.grok.api_url, "https://api.x.ai/v1");
        assert_eq!(config.grok.model, "grok-beta");
        assert!(config.grok.api_key.is_none());
        assert_eq!(config.grok.timeout_secs, 30);
        assert_eq!(config.grok.history_window, 10);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[agent]
name = "helpdesk"
log_level = "debug"

[grok]
model = "grok-2"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.agent.name, "helpdesk");
        assert_eq!(config.agent.log_level, "debug");
        assert_eq!(config.grok.model, "grok-2");
        // Untouched keys keep their defaults.
        assert_eq!(config.grok.api_url, "https://api.x.ai/v1");
    }

    #[test]
    fn grok_section_accepts_credential_keys() {
        let config = load_config_from_str(
            r#"
[grok]
api_key = "xai-test-key"
org_id = "org-42"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.grok.api_key.as_deref(), Some("xai-test-key"));
        assert_eq!(config.grok.org_id.as_deref(), Some("org-42"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
[grok]
api_kye = "oops"
"#,
        );
        assert!(result.is_err());
    }
}
