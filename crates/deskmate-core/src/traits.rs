// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits at the engine's external seams.
//!
//! The engine crates depend on these traits, not on concrete stores, so the
//! router can be exercised in tests with in-memory fakes.

use async_trait::async_trait;

use crate::error::DeskmateError;
use crate::types::TicketRequest;

/// A keyword hit from the secondary remediation-step store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSteps {
    /// The keyword that matched the query.
    pub keyword: String,
    /// Ordered remediation steps for that keyword.
    pub steps: Vec<String>,
}

/// Secondary keyword→step-list lookup, consulted only after every built-in
/// intent has failed to match.
///
/// Lookup is a cheap in-memory scan: the store is loaded once at startup
/// and immutable thereafter, so classification stays synchronous.
pub trait KeywordStore: Send + Sync {
    /// Return steps for the first stored keyword that occurs in `query`
    /// (case-insensitive substring match), or `None`.
    fn lookup(&self, query: &str) -> Option<KeywordSteps>;
}

/// Ticket persistence collaborator.
///
/// Implementations own the storage format; callers only see the opaque
/// ticket identifier.
#[async_trait]
pub trait TicketSink: Send + Sync {
    /// Persist a ticket and return its identifier.
    async fn create(&self, request: &TicketRequest) -> Result<String, DeskmateError>;
}
