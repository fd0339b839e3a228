// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Language detection and localized text for the Deskmate helpdesk engine.
//!
//! Detection is keyword-based scoring over a fixed indicator table; no
//! external NLP models. Localization is a static bundle lookup with an
//! English fallback chain, plus the language-enforcement directives sent
//! to the AI gateway.

pub mod detect;
pub mod localize;

pub use detect::LanguageDetector;
pub use localize::Localizer;
