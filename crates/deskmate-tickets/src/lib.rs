// SPDX-FileCopyrightText: 2026 Deskmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed support ticket sink.
//!
//! Tickets append to a JSON array on disk. Ticket ids are
//! `TKT<unix-seconds>`; when the sink cannot write, callers can still
//! hand the user an id via [`create_or_fallback`], which mints a
//! `TKT-<YYYYMMDD>-<nnnn>` id without persisting anything.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Local, Utc};
use deskmate_core::{DeskmateError, TicketRequest, TicketSink};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One persisted ticket record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRecord {
    pub ticket_id: String,
    pub username: String,
    pub user_id: String,
    pub email: String,
    pub summary: String,
    pub timestamp: String,
}

/// Ticket sink appending to a JSON array file.
#[derive(Debug, Clone)]
pub struct FileTicketSink {
    path: PathBuf,
}

impl FileTicketSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_existing(&self) -> Result<Vec<TicketRecord>, DeskmateError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })?;
        serde_json::from_str(&content).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })
    }

    fn write_all(&self, tickets: &[TicketRecord]) -> Result<(), DeskmateError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DeskmateError::Store {
                source: Box::new(e),
            })?;
        }
        let content = serde_json::to_string_pretty(tickets).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })?;
        std::fs::write(&self.path, content).map_err(|e| DeskmateError::Store {
            source: Box::new(e),
        })
    }
}

#[async_trait]
impl TicketSink for FileTicketSink {
    async fn create(&self, request: &TicketRequest) -> Result<String, DeskmateError> {
        let ticket_id = format!("TKT{}", Utc::now().timestamp());
        let record = TicketRecord {
            ticket_id: ticket_id.clone(),
            username: request.username.clone(),
            user_id: request.opaque_id.clone(),
            email: request.email.clone(),
            summary: request.summary.clone(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut tickets = self.read_existing()?;
        tickets.push(record);
        self.write_all(&tickets)?;

        info!(%ticket_id, username = %request.username, "ticket created");
        Ok(ticket_id)
    }
}

/// Create a ticket, minting a dated fallback id when the sink fails.
///
/// The fallback id is `TKT-<YYYYMMDD>-<nnnn>` with a random four-digit
/// suffix; the ticket is NOT persisted in that case, but the user still
/// gets a reference they can quote to the support team.
pub async fn create_or_fallback(sink: &dyn TicketSink, request: &TicketRequest) -> String {
    match sink.create(request).await {
        Ok(ticket_id) => ticket_id,
        Err(e) => {
            warn!(error = %e, "ticket sink failed, minting fallback id");
            let date = Local::now().format("%Y%m%d");
            let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);
            format!("TKT-{date}-{suffix}")
        }
    }
}

/// Load all persisted tickets (for the CLI listing).
pub fn load_tickets(path: &Path) -> Result<Vec<TicketRecord>, DeskmateError> {
    FileTicketSink::new(path).read_existing()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_request() -> TicketRequest {
        TicketRequest {
            username: "maria".to_string(),
            opaque_id: "EMP-1001".to_string(),
            email: "maria@example.com".to_string(),
            summary: "VPN will not connect".to_string(),
        }
    }

    #[tokio::test]
    async fn create_appends_to_new_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tickets.json");
        let sink = FileTicketSink::new(&path);

        let ticket_id = sink.create(&test_request()).await.expect("creates");
        assert!(ticket_id.starts_with("TKT"));

        let tickets = load_tickets(&path).expect("reads back");
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].ticket_id, ticket_id);
        assert_eq!(tickets[0].username, "maria");
        assert_eq!(tickets[0].summary, "VPN will not connect");
    }

    #[tokio::test]
    async fn create_preserves_existing_tickets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tickets.json");
        let sink = FileTicketSink::new(&path);

        sink.create(&test_request()).await.expect("first");
        sink.create(&test_request()).await.expect("second");

        let tickets = load_tickets(&path).expect("reads back");
        assert_eq!(tickets.len(), 2);
    }

    #[tokio::test]
    async fn create_or_fallback_returns_sink_id_on_success() {
        let dir = tempfile::tempdir().expect("tempdir");
        let sink = FileTicketSink::new(dir.path().join("tickets.json"));
        let id = create_or_fallback(&sink, &test_request()).await;
        assert!(id.starts_with("TKT"));
        assert!(!id.starts_with("TKT-"));
    }

    #[tokio::test]
    async fn create_or_fallback_mints_dated_id_on_failure() {
        struct FailingSink;

        #[async_trait]
        impl TicketSink for FailingSink {
            async fn create(&self, _request: &TicketRequest) -> Result<String, DeskmateError> {
                Err(DeskmateError::Internal("disk full".to_string()))
            }
        }

        let id = create_or_fallback(&FailingSink, &test_request()).await;
        // TKT-YYYYMMDD-nnnn
        assert!(id.starts_with("TKT-"));
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].len(), 8);
        assert_eq!(parts[2].len(), 4);
        let suffix: u16 = parts[2].parse().expect("numeric suffix");
        assert!((1000..=9999).contains(&suffix));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_store_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("tickets.json");
        std::fs::write(&path, "not json").expect("write");
        let sink = FileTicketSink::new(&path);
        let err = sink.create(&test_request()).await.unwrap_err();
        assert!(matches!(err, DeskmateError::Store { .. }));
    }
}
