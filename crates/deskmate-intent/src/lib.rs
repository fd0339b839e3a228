// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classification and deterministic troubleshooting templates.
//!
//! The classifier checks built-in intents in a fixed priority order, then
//! an optional secondary keyword store, then gives up with a clarification
//! response. Templates carry their own translations where they exist;
//! everything else renders in English.

pub mod classify;
pub mod store;
pub mod templates;

pub use classify::{Classification, IntentClassifier};
pub use store::JsonKeywordStore;
pub use templates::{clarification, keyword_steps_response, render_template};
