// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-turn query routing: detect language, try the AI gateway, fall back
//! to deterministic templates.
//!
//! The router is stateless between calls. Conversation history is an
//! explicit input owned by the caller's session; the router never persists
//! it, so independent sessions can route concurrently without locks. It
//! also never errors: every path degrades to a deterministic response.

use deskmate_core::{CompletionOutcome, ConversationTurn, Intent, Language, UserContext};
use deskmate_grok::GrokGateway;
use deskmate_intent::{Classification, IntentClassifier, clarification, keyword_steps_response, render_template};
use deskmate_lang::{LanguageDetector, Localizer};
use tracing::{debug, info};

/// How a routed response was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseVia {
    /// Generated by the AI gateway.
    Gateway,
    /// Rendered from a built-in intent template.
    Template(Intent),
    /// Looked up in the secondary keyword store.
    Lookup(String),
    /// Nothing matched; the clarification prompt was returned.
    Clarification,
}

/// A fully formatted response for one user turn.
#[derive(Debug, Clone)]
pub struct RoutedResponse {
    /// Display-ready text (including any RTL/CJK presentation wrapper).
    pub text: String,
    /// The language detected for this turn.
    pub language: Language,
    /// Which path produced the text.
    pub via: ResponseVia,
}

/// Orchestrates detector, gateway, classifier, and localizer for one turn.
///
/// Every collaborator is injected at construction; there are no globals.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    detector: LanguageDetector,
    localizer: Localizer,
    classifier: IntentClassifier,
    gateway: GrokGateway,
}

impl QueryRouter {
    pub fn new(
        detector: LanguageDetector,
        localizer: Localizer,
        classifier: IntentClassifier,
        gateway: GrokGateway,
    ) -> Self {
        Self {
            detector,
            localizer,
            classifier,
            gateway,
        }
    }

    /// Whether the AI gateway will be attempted for incoming turns.
    pub fn ai_available(&self) -> bool {
        self.gateway.is_available()
    }

    /// Route one user turn to a response.
    ///
    /// Language is detected fresh for every message; the detected language
    /// governs this turn's response regardless of the context's preferred
    /// language. Callers must reject empty queries before invoking this.
    pub async fn route(
        &self,
        query: &str,
        user: &UserContext,
        history: &[ConversationTurn],
    ) -> RoutedResponse {
        let language = self.detector.detect(query);
        debug!(%language, "turn language detected");

        let directive = self.localizer.language_prompt(language);
        let outcome = self.gateway.complete(query, history, user, directive).await;

        let (body, via) = match outcome {
            CompletionOutcome::Success(text) => (text, ResponseVia::Gateway),
            CompletionOutcome::Unavailable(reason) => {
                info!(%reason, "gateway unavailable, using template fallback");
                self.fallback(query, user, language)
            }
        };

        RoutedResponse {
            text: self.localizer.format_for_display(&body, language),
            language,
            via,
        }
    }

    fn fallback(
        &self,
        query: &str,
        user: &UserContext,
        language: Language,
    ) -> (String, ResponseVia) {
        match self.classifier.classify(query) {
            Classification::Builtin(intent) => {
                match render_template(intent, language, &user.display_name) {
                    Some(text) => (text, ResponseVia::Template(intent)),
                    // Unreachable for named intents; degrade rather than panic.
                    None => (
                        clarification(language, &user.display_name),
                        ResponseVia::Clarification,
                    ),
                }
            }
            Classification::Lookup { keyword, steps } => {
                let text = keyword_steps_response(&user.display_name, &keyword, &steps);
                (text, ResponseVia::Lookup(keyword))
            }
            Classification::Unclassified => (
                clarification(language, &user.display_name),
                ResponseVia::Clarification,
            ),
        }
    }

    /// Session welcome line, reflecting whether the gateway is live.
    pub fn welcome(&self, user: &UserContext, language: Language) -> String {
        self.localizer
            .welcome_message(&user.display_name, self.ai_available(), language)
    }

    /// Summarize the session into ticket text (AI with deterministic fallback).
    pub async fn ticket_summary(
        &self,
        history: &[ConversationTurn],
        user: &UserContext,
    ) -> String {
        self.gateway.ticket_summary(history, user).await
    }
}
