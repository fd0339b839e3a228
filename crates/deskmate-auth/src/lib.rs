// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed user credential store.
//!
//! Credentials are a JSON array of user records compared in plaintext.
//! This mirrors the upstream deployment's data file and is a known
//! weakness: the store format carries no hashing, so the file must be
//! protected by filesystem permissions until a hashed scheme replaces it.

use std::path::Path;

use deskmate_core::DeskmateError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One credential record from the users file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
    pub id: String,
    pub email: String,
}

/// In-memory view of the users file, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    /// Load the store from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DeskmateError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })?;
        Self::from_json(&content)
    }

    /// Parse the store from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, DeskmateError> {
        let users: Vec<UserRecord> =
            serde_json::from_str(content).map_err(|e| DeskmateError::Store {
                source: Box::new(e),
            })?;
        info!(users = users.len(), "user store loaded");
        Ok(Self { users })
    }

    /// Authenticate a username/password pair.
    ///
    /// Plaintext equality against the stored record. Returns the full
    /// record on success so callers can build a user context.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserRecord> {
        let found = self
            .users
            .iter()
            .find(|user| user.username == username && user.password == password);
        if found.is_none() {
            warn!(%username, "authentication failed");
        }
        found
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
