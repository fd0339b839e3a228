// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Deskmate workspace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A supported interface language.
///
/// Closed set per deployment. Unknown codes normalize to the default
/// language ([`Language::En`]) via [`Language::from_code`] rather than
/// erroring.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Nl,
    Ru,
    Zh,
    Ja,
    Ko,
    Ar,
    Hi,
}

impl Language {
    /// All supported languages, in catalogue order (used for UI listings).
    pub const ALL: &'static [Language] = &[
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Nl,
        Language::Ru,
        Language::Zh,
        Language::Ja,
        Language::Ko,
        Language::Ar,
        Language::Hi,
    ];

    /// The deployment default language.
    pub const DEFAULT: Language = Language::En;

    /// Two-letter language code (e.g., `"es"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Ar => "ar",
            Language::Hi => "hi",
        }
    }

    /// Parse a language code, normalizing anything unrecognized to the
    /// default language.
    pub fn from_code(code: &str) -> Language {
        code.trim()
            .to_lowercase()
            .parse()
            .unwrap_or(Language::DEFAULT)
    }

    /// Native display name of the language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Nl => "Nederlands",
            Language::Ru => "Русский",
            Language::Zh => "中文",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
            Language::Ar => "العربية",
            Language::Hi => "हिन्दी",
        }
    }

    /// Flag emoji for UI listings.
    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Es => "🇪🇸",
            Language::Fr => "🇫🇷",
            Language::De => "🇩🇪",
            Language::It => "🇮🇹",
            Language::Pt => "🇵🇹",
            Language::Nl => "🇳🇱",
            Language::Ru => "🇷🇺",
            Language::Zh => "🇨🇳",
            Language::Ja => "🇯🇵",
            Language::Ko => "🇰🇷",
            Language::Ar => "🇸🇦",
            Language::Hi => "🇮🇳",
        }
    }

    /// Right-to-left script.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Chinese/Japanese/Korean — gets a line-height display hint.
    pub fn is_cjk(&self) -> bool {
        matches!(self, Language::Zh | Language::Ja | Language::Ko)
    }
}

/// A classified category of IT support request.
///
/// Classification tests the named intents in [`Intent::PRIORITY`] order;
/// keyword sets are not disjoint (e.g., "connection" triggers both VPN and
/// Network), so the declared order is the tie-break. `Unclassified` is the
/// terminal intent when nothing matches — it is a defined outcome, not an
/// error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum Intent {
    PasswordReset,
    Vpn,
    Email,
    Printer,
    Performance,
    Network,
    Unclassified,
}

impl Intent {
    /// Classification priority order for the named intents.
    /// `Unclassified` is not listed — it is the fallthrough.
    pub const PRIORITY: [Intent; 6] = [
        Intent::PasswordReset,
        Intent::Vpn,
        Intent::Email,
        Intent::Printer,
        Intent::Performance,
        Intent::Network,
    ];
}

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message exchange unit in a conversation.
///
/// A session's turn sequence is append-only and exclusively owned by that
/// session; the router receives it as input and never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub language: Language,
}

impl ConversationTurn {
    /// Create a user turn stamped with the current time.
    pub fn user(message: impl Into<String>, language: Language) -> Self {
        Self {
            role: Role::User,
            message: message.into(),
            timestamp: Utc::now(),
            language,
        }
    }

    /// Create an assistant turn stamped with the current time.
    pub fn assistant(message: impl Into<String>, language: Language) -> Self {
        Self {
            role: Role::Assistant,
            message: message.into(),
            timestamp: Utc::now(),
            language,
        }
    }
}

/// Read-only user context passed into the router. Never mutated internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    /// Name used in salutations.
    pub display_name: String,
    /// Opaque user identifier from the credential store.
    pub opaque_id: String,
    /// Contact email for ticket creation.
    pub contact_email: String,
    /// Preferred or last-detected language.
    pub language: Language,
}

impl UserContext {
    pub fn new(
        display_name: impl Into<String>,
        opaque_id: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            opaque_id: opaque_id.into(),
            contact_email: contact_email.into(),
            language: Language::DEFAULT,
        }
    }
}

/// Why a completion attempt did not produce text.
///
/// The router treats every reason identically (fall back to templates);
/// the reason exists for logs and tests, not for branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No credential configured; the gateway is disabled for the process
    /// lifetime and no network I/O was attempted.
    NotConfigured,
    /// Transport failure or timeout.
    NetworkError,
    /// The backend answered with a non-200 status.
    BadStatus(u16),
    /// The backend answered 200 but the body did not have the expected shape.
    MalformedBody,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::NotConfigured => write!(f, "not configured"),
            UnavailableReason::NetworkError => write!(f, "network error"),
            UnavailableReason::BadStatus(status) => write!(f, "bad status {status}"),
            UnavailableReason::MalformedBody => write!(f, "malformed body"),
        }
    }
}

/// Result of one AI completion attempt. `Unavailable` is a first-class
/// outcome, never a propagated exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(String),
    Unavailable(UnavailableReason),
}

/// Input to the ticket sink collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    pub username: String,
    pub opaque_id: String,
    pub email: String,
    pub summary: String,
}
