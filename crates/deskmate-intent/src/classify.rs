// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-match intent classification over trigger keyword pools.
//!
//! Each built-in intent has a pool of trigger strings spanning several
//! languages; pools are checked in `Intent::PRIORITY` order and the first
//! pool with any substring hit wins. A query that matches no pool falls
//! through to the secondary keyword store, and finally to `Unclassified`.

use std::sync::Arc;

use deskmate_core::{Intent, KeywordStore};
use tracing::debug;

/// Trigger pools per built-in intent. Order within a pool is irrelevant;
/// the pool-to-pool order follows `Intent::PRIORITY`, so a query matching
/// both password and VPN triggers classifies as a password reset.
fn triggers(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::PasswordReset => &[
            "password",
            "login",
            "forgot",
            "reset",
            "locked",
            "contraseña",
            "mot de passe",
            "passwort",
            "accesso",
            "dimenticato",
            "blocca",
            "reimpostare",
            "restablecer",
            "olvidé",
            "olvidado",
            "bloqueado",
            "iniciar sesión",
        ],
        Intent::Vpn => &[
            "vpn",
            "remote",
            "connection",
            "work from home",
            "installare",
            "installa",
            "connessione",
            "accesso remoto",
            "instalar",
            "quiero",
            "conexión",
            "acceso remoto",
        ],
        Intent::Email => &["email", "outlook", "mail", "send", "receive"],
        Intent::Printer => &["printer", "print", "printing"],
        Intent::Performance => &["slow", "performance", "running slow", "sluggish"],
        Intent::Network => &["wifi", "wi-fi", "wireless", "internet", "network"],
        Intent::Unclassified => &[],
    }
}

/// The outcome of classifying a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A built-in intent with canned troubleshooting templates.
    Builtin(Intent),
    /// A hit in the secondary keyword store.
    Lookup { keyword: String, steps: Vec<String> },
    /// Nothing matched; respond with a clarification prompt.
    Unclassified,
}

/// Classifies helpdesk queries against trigger pools and an optional
/// secondary keyword store.
#[derive(Clone, Default)]
pub struct IntentClassifier {
    keyword_store: Option<Arc<dyn KeywordStore>>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self {
            keyword_store: None,
        }
    }

    /// Attach a secondary keyword store consulted after the built-in pools.
    pub fn with_keyword_store(mut self, store: Arc<dyn KeywordStore>) -> Self {
        self.keyword_store = Some(store);
        self
    }

    /// Classify a query. Matching is case-insensitive substring search;
    /// built-in pools are checked in priority order before the store.
    pub fn classify(&self, query: &str) -> Classification {
        let query_lower = query.to_lowercase();

        for intent in Intent::PRIORITY {
            if triggers(intent)
                .iter()
                .any(|trigger| query_lower.contains(trigger))
            {
                debug!(%intent, "query matched built-in intent");
                return Classification::Builtin(intent);
            }
        }

        if let Some(store) = &self.keyword_store {
            if let Some(hit) = store.lookup(&query_lower) {
                debug!(keyword = %hit.keyword, "query matched keyword store");
                return Classification::Lookup {
                    keyword: hit.keyword,
                    steps: hit.steps,
                };
            }
        }

        debug!("query did not match any intent");
        Classification::Unclassified
    }
}

impl std::fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("keyword_store", &self.keyword_store.is_some())
            .finish()
    }
}
