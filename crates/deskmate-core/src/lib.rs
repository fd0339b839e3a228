// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Deskmate helpdesk engine.
//!
//! This crate provides the shared types, the error enum, and the
//! collaborator traits used throughout the Deskmate workspace. The engine
//! crates (language, intent, gateway, router) all build on what is
//! defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::DeskmateError;
pub use types::{
    CompletionOutcome, ConversationTurn, Intent, Language, Role, TicketRequest, UnavailableReason,
    UserContext,
};

pub use traits::{KeywordStore, KeywordSteps, TicketSink};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deskmate_error_has_all_variants() {
        // Verify all 5 error variants exist and can be constructed.
        let _config = DeskmateError::Config("test".into());
        let _store = DeskmateError::Store {
            source: Box::new(std::io::Error::other("test")),
        };
        let _gateway = DeskmateError::Gateway {
            message: "test".into(),
            source: None,
        };
        let _timeout = DeskmateError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = DeskmateError::Internal("test".into());
    }

    #[test]
    fn language_round_trips_through_code() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
    }

    #[test]
    fn unknown_language_code_normalizes_to_default() {
        assert_eq!(Language::from_code("xx"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
        assert_eq!(Language::from_code("EN-us"), Language::En);
    }

    #[test]
    fn intent_priority_order_is_fixed() {
        // The declared order is a contract: classification tests intents
        // in this order and keyword sets overlap.
        let order = [
            Intent::PasswordReset,
            Intent::Vpn,
            Intent::Email,
            Intent::Printer,
            Intent::Performance,
            Intent::Network,
        ];
        assert_eq!(Intent::PRIORITY, order);
    }

    #[test]
    fn completion_outcome_variants() {
        let ok = CompletionOutcome::Success("hello".into());
        assert!(matches!(ok, CompletionOutcome::Success(_)));

        let gone = CompletionOutcome::Unavailable(UnavailableReason::NotConfigured);
        assert!(matches!(
            gone,
            CompletionOutcome::Unavailable(UnavailableReason::NotConfigured)
        ));
    }

    #[test]
    fn conversation_turn_serializes() {
        let turn = ConversationTurn::user("my vpn is broken", Language::En);
        let json = serde_json::to_string(&turn).expect("should serialize");
        let parsed: ConversationTurn = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed.role, Role::User);
        assert_eq!(parsed.message, "my vpn is broken");
        assert_eq!(parsed.language, Language::En);
    }
}
