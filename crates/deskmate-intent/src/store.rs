// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed secondary keyword store.
//!
//! The store is a flat JSON object mapping a keyword to its list of
//! troubleshooting steps. It is loaded once at startup; edits to the file
//! require a restart.

use std::collections::BTreeMap;
use std::path::Path;

use deskmate_core::{DeskmateError, KeywordSteps, KeywordStore};
use tracing::info;

/// Keyword store loaded from a JSON object of `keyword -> [steps]`.
///
/// A `BTreeMap` keeps iteration order stable, so when a query mentions two
/// stored keywords the lexicographically first one wins deterministically.
#[derive(Debug, Clone, Default)]
pub struct JsonKeywordStore {
    entries: BTreeMap<String, Vec<String>>,
}

impl JsonKeywordStore {
    /// Load the store from a JSON file.
    ///
    /// A missing file yields an empty store rather than an error; the
    /// secondary store is optional by design.
    pub fn load(path: &Path) -> Result<Self, DeskmateError> {
        if !path.exists() {
            info!(path = %path.display(), "keyword store file absent, starting empty");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })?;
        Self::from_json(&content)
    }

    /// Parse the store from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, DeskmateError> {
        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(content).map_err(|e| DeskmateError::Store {
                source: Box::new(e),
            })?;
        info!(keywords = entries.len(), "keyword store loaded");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeywordStore for JsonKeywordStore {
    fn lookup(&self, query: &str) -> Option<KeywordSteps> {
        let query_lower = query.to_lowercase();
        self.entries
            .iter()
            .find(|(keyword, _)| query_lower.contains(keyword.as_str()))
            .map(|(keyword, steps)| KeywordSteps {
                keyword: keyword.clone(),
                steps: steps.clone(),
            })
    }
}
