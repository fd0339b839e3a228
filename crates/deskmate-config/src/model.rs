// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Deskmate helpdesk engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, producing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Deskmate configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides (`DESKMATE_*` and the legacy `GROK_*` credential
/// variables). All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeskmateConfig {
    /// Assistant identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Grok completion API settings.
    #[serde(default)]
    pub grok: GrokConfig,

    /// File-backed collaborator store locations.
    #[serde(default)]
    pub data: DataConfig,
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default language code when detection scores nothing.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            default_language: default_language(),
        }
    }
}

fn default_agent_name() -> String {
    "deskmate".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Grok completion API configuration.
///
/// Absence of `api_key` disables the gateway for the process lifetime;
/// there is no runtime re-configuration without a restart.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GrokConfig {
    /// API key. `None` disables the AI gateway entirely.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base API URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional organization id forwarded as a request header.
    #[serde(default)]
    pub org_id: Option<String>,

    /// Hard timeout for one completion call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How many recent conversation turns accompany a request.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for GrokConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            org_id: None,
            timeout_secs: default_timeout_secs(),
            history_window: default_history_window(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.x.ai/v1".to_string()
}

fn default_model() -> String {
    "grok-beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_history_window() -> usize {
    10
}

/// Locations of the file-backed collaborator stores.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Path to the user credential records (JSON array).
    #[serde(default = "default_users_path")]
    pub users_path: String,

    /// Path to the ticket store (JSON array, appended to).
    #[serde(default = "default_tickets_path")]
    pub tickets_path: String,

    /// Path to the secondary keyword→steps map (JSON object).
    #[serde(default = "default_keyword_steps_path")]
    pub keyword_steps_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            tickets_path: default_tickets_path(),
            keyword_steps_path: default_keyword_steps_path(),
        }
    }
}

fn data_file(name: &str) -> String {
    dirs::data_dir()
        .map(|p| p.join("deskmate").join(name))
        .unwrap_or_else(|| std::path::PathBuf::from(name))
        .to_string_lossy()
        .into_owned()
}

fn default_users_path() -> String {
    data_file("users.json")
}

fn default_tickets_path() -> String {
    data_file("tickets.json")
}

fn default_keyword_steps_path() -> String {
    data_file("keyword_steps.json")
}
