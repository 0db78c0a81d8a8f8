//! Test utilities for ticket-tracking
//!
//! This module provides common test fixtures and utilities to reduce
//! duplication in test code across the codebase.

#![cfg(test)]

use crate::core::{Priority, Status, Ticket, TicketBuilder};
use crate::storage::JsonTicketStore;
use std::path::Path;
use tempfile::TempDir;

/// Test fixture holding a store over a file in a temporary directory
pub struct TestStore {
    pub temp_dir: TempDir,
    pub store: JsonTicketStore,
}

impl TestStore {
    /// Create an empty store
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonTicketStore::open(temp_dir.path().join("tickets.json"));

        Self { temp_dir, store }
    }

    /// Create a store holding tickets "1" to "3"
    ///
    /// 1. "Fix login bug", OPEN, HIGH
    /// 2. "UI glitch", CLOSED, LOW
    /// 3. "Update documentation", NEW, MEDIUM
    pub fn with_sample_tickets() -> Self {
        let mut fixture = Self::new();

        for ticket in sample_tickets() {
            fixture
                .store
                .save_ticket(ticket)
                .expect("Failed to save ticket");
        }

        fixture
    }

    /// Path of the backing JSON document
    pub fn path(&self) -> &Path {
        self.store.path()
    }
}

/// Unsaved tickets matching [`TestStore::with_sample_tickets`]
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        ticket_with("Fix login bug", Status::Open, Priority::High),
        ticket_with("UI glitch", Status::Closed, Priority::Low),
        ticket_with("Update documentation", Status::New, Priority::Medium),
    ]
}

/// Create an unsaved ticket with the given title, status and priority
pub fn ticket_with(title: &str, status: Status, priority: Priority) -> Ticket {
    TicketBuilder::new()
        .title(title)
        .description(format!("Description for {title}"))
        .status(status)
        .priority(priority)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let fixture = TestStore::new();
        assert!(fixture.path().exists());
        assert!(fixture.store.is_empty());
    }

    #[test]
    fn test_store_with_sample_tickets() {
        let fixture = TestStore::with_sample_tickets();
        let tickets = fixture.store.get_all_tickets();
        assert_eq!(tickets.len(), 3);
        assert_eq!(tickets[2].id.as_deref(), Some("3"));
    }
}
