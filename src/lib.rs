//! ticket-tracking - A small support ticket tracker backed by a JSON file
//!
//! This crate provides:
//! - A ticket model with statuses, priorities and threaded comments
//! - A fixed directory of users with roles and an acting user
//! - A JSON file store with validation and sequential numeric ids
//! - Text search, filtering and sorting over ticket lists

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_self)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::fn_params_excessive_bools)]
#![allow(clippy::map_unwrap_or)]

//! # Example
//!
//! ```rust,no_run
//! use ticket_tracking::core::{Priority, Ticket, now};
//! use ticket_tracking::storage::{JsonTicketStore, TicketRepository};
//!
//! let mut store = JsonTicketStore::open("tickets/tickets.json");
//! let ticket = Ticket::new("Printer offline", "Second floor", Priority::High, now());
//! let saved = store.create(ticket)?;
//! assert_eq!(saved.id.as_deref(), Some("1"));
//! # Ok::<(), ticket_tracking::TicketError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod interactive;
pub mod storage;
pub mod users;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketError};
