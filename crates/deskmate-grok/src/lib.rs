// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Grok chat-completion gateway.
//!
//! Wraps the x.ai OpenAI-compatible `/chat/completions` endpoint. The
//! gateway is deliberately failure-absorbing: any runtime fault (network,
//! bad status, unparseable body) surfaces as
//! [`deskmate_core::CompletionOutcome::Unavailable`] so the router can fall
//! back to deterministic templates. Calls are never retried; the fallback
//! answers faster than a second network attempt would.

pub mod client;
pub mod prompt;

pub use client::GrokGateway;
pub use prompt::{fallback_summary, summary_prompt, system_prompt};
