// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Deskmate helpdesk engine.
//!
//! Note that AI-gateway unavailability is deliberately *not* an error:
//! it is modeled as [`crate::CompletionOutcome::Unavailable`] so the router
//! can fall back to templates without touching an error path. This enum
//! covers genuine integration faults only (config, file stores, internal
//! invariants).

use thiserror::Error;

/// The primary error type used across Deskmate crates.
#[derive(Debug, Error)]
pub enum DeskmateError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// File-backed store errors (user records, tickets, keyword steps).
    #[error("store error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gateway construction or protocol errors that are the caller's fault
    /// (e.g., an API key that cannot form a valid header). Runtime call
    /// failures are absorbed into `CompletionOutcome::Unavailable` instead.
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
