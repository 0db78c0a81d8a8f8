//! Error types for ticket-tracking
//!
//! All fallible operations in the crate return [`Result`], whose error type
//! groups failures into validation, lookup, persistence and front-end errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketError>;

/// Main error type for ticket-tracking
#[derive(Error, Debug)]
pub enum TicketError {
    /// The ticket title is missing or blank
    #[error("Ticket title is required")]
    MissingTitle,

    /// The ticket has no status
    #[error("Ticket status is required")]
    MissingStatus,

    /// The ticket has no priority
    #[error("Ticket priority is required")]
    MissingPriority,

    /// An update or delete was attempted on a ticket without an id
    #[error("Ticket ID is required for this operation")]
    MissingId,

    #[error("Ticket not found with ID: {id}")]
    TicketNotFound { id: String },

    #[error("A ticket with ID {id} already exists")]
    DuplicateId { id: String },

    #[error("User not found: {username}")]
    UserNotFound { username: String },

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Writing the ticket document failed
    ///
    /// The in-memory collection already holds the change when this is
    /// returned; memory and disk disagree until the next successful write.
    #[error("Failed to save tickets to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),

    #[error("{0}")]
    Custom(String),
}

impl TicketError {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Whether this error comes from ticket validation
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingTitle | Self::MissingStatus | Self::MissingPriority | Self::MissingId
        )
    }

    /// Whether this error refers to an absent ticket or user
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound { .. } | Self::UserNotFound { .. })
    }

    /// Whether the user can fix the problem and simply retry
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Persist { .. } | Self::Io(_) | Self::Serialization(_)
        )
    }

    /// Whether this error was caused by configuration
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Message suitable for showing to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingTitle => "Title is required. Please enter a title for the ticket.".into(),
            Self::MissingStatus => {
                "Status is required. Please select a status for the ticket.".into()
            },
            Self::MissingPriority => {
                "Priority is required. Please select a priority for the ticket.".into()
            },
            _ => self.to_string(),
        }
    }

    /// Hints on how to resolve the error
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TicketNotFound { .. } => vec![
                "Run 'ticket-tracking list' to see existing ticket IDs".to_string(),
            ],
            Self::UserNotFound { .. } => {
                vec!["Run 'ticket-tracking users' to see known usernames".to_string()]
            },
            Self::InvalidStatus(_) => vec![
                "Valid statuses: new, in_progress, on_hold, resolved, open, closed".to_string(),
            ],
            Self::InvalidPriority(_) => {
                vec!["Valid priorities: low, medium, high, critical".to_string()]
            },
            Self::Persist { .. } => vec![
                "Check that the ticket file's directory exists and is writable".to_string(),
                "Use --store to point at a different file".to_string(),
            ],
            Self::Config(_) => vec!["Check ticket-tracking.toml for typos".to_string()],
            _ => Vec::new(),
        }
    }
}
