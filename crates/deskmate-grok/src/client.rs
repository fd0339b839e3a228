// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Grok chat-completions endpoint.
//!
//! Provides [`GrokGateway`] which handles request construction and
//! authentication. Runtime faults are absorbed into
//! [`CompletionOutcome::Unavailable`]; only construction can fail.

use std::time::Duration;

use deskmate_config::model::GrokConfig;
use deskmate_core::{
    CompletionOutcome, ConversationTurn, DeskmateError, Role, UnavailableReason, UserContext,
};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::prompt;

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Gateway to the Grok chat-completions API.
///
/// Constructed once from config. A missing API key produces a permanently
/// disabled gateway: every call returns
/// `Unavailable(NotConfigured)` without touching the network, and the
/// process must restart to pick up a key.
#[derive(Debug, Clone)]
pub struct GrokGateway {
    inner: Option<GatewayInner>,
}

#[derive(Debug, Clone)]
struct GatewayInner {
    client: reqwest::Client,
    base_url: String,
    model: String,
    history_window: usize,
}

impl GrokGateway {
    /// Build a gateway from the `[grok]` config section.
    ///
    /// Fails only when a present API key or org id cannot form a valid
    /// HTTP header; absence of the key is not an error.
    pub fn from_config(config: &GrokConfig) -> Result<Self, DeskmateError> {
        let Some(api_key) = &config.api_key else {
            info!("no Grok API key configured, gateway disabled");
            return Ok(Self { inner: None });
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                DeskmateError::Gateway {
                    message: format!("invalid API key header value: {e}"),
                    source: Some(Box::new(e)),
                }
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        if let Some(org_id) = &config.org_id {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org_id).map_err(|e| DeskmateError::Gateway {
                    message: format!("invalid organization header value: {e}"),
                    source: Some(Box::new(e)),
                })?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DeskmateError::Gateway {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            inner: Some(GatewayInner {
                client,
                base_url: config.api_url.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                history_window: config.history_window,
            }),
        })
    }

    /// Whether the gateway holds credentials and will attempt the network.
    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        if let Some(inner) = &mut self.inner {
            inner.base_url = url;
        }
        self
    }

    /// Request a completion for `query` with recent conversation context.
    ///
    /// Only the trailing `history_window` turns accompany the request. The
    /// call is made exactly once: any fault maps to an
    /// [`UnavailableReason`] and the caller falls back to templates.
    pub async fn complete(
        &self,
        query: &str,
        history: &[ConversationTurn],
        user: &UserContext,
        language_directive: &str,
    ) -> CompletionOutcome {
        let Some(inner) = &self.inner else {
            return CompletionOutcome::Unavailable(UnavailableReason::NotConfigured);
        };

        let mut messages = vec![WireMessage {
            role: "system".to_string(),
            content: prompt::system_prompt(language_directive, user),
        }];

        let window_start = history.len().saturating_sub(inner.history_window);
        for turn in &history[window_start..] {
            messages.push(WireMessage {
                role: match turn.role {
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: turn.message.clone(),
            });
        }
        messages.push(WireMessage {
            role: "user".to_string(),
            content: query.to_string(),
        });

        let request = ChatRequest {
            model: inner.model.clone(),
            messages,
            temperature: 0.7,
            max_tokens: 1000,
            stream: false,
        };

        let response = match inner
            .client
            .post(format!("{}/chat/completions", inner.base_url))
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "completion request failed, falling back");
                return CompletionOutcome::Unavailable(UnavailableReason::NetworkError);
            }
        };

        let status = response.status();
        debug!(status = %status, "completion response received");
        if !status.is_success() {
            warn!(status = %status, "completion returned non-success, falling back");
            return CompletionOutcome::Unavailable(UnavailableReason::BadStatus(status.as_u16()));
        }

        match response.json::<ChatResponse>().await {
            Ok(body) => match body.choices.into_iter().next() {
                Some(choice) => {
                    CompletionOutcome::Success(choice.message.content.trim().to_string())
                }
                None => {
                    warn!("completion body had no choices, falling back");
                    CompletionOutcome::Unavailable(UnavailableReason::MalformedBody)
                }
            },
            Err(e) => {
                warn!(error = %e, "completion body unparseable, falling back");
                CompletionOutcome::Unavailable(UnavailableReason::MalformedBody)
            }
        }
    }

    /// Summarize a chat into ticket text, with a deterministic fallback.
    ///
    /// Used when filing a ticket from an ongoing session; always returns
    /// usable text.
    pub async fn ticket_summary(
        &self,
        history: &[ConversationTurn],
        user: &UserContext,
    ) -> String {
        let summary_query = prompt::summary_prompt(history);
        match self.complete(&summary_query, &[], user, "").await {
            CompletionOutcome::Success(text) => text,
            CompletionOutcome::Unavailable(reason) => {
                debug!(%reason, "summary unavailable, using fallback text");
                prompt::fallback_summary(user)
            }
        }
    }
}
