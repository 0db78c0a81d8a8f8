use super::{Comment, null_as_default, optional_timestamp};
use crate::error::TicketError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow state of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    New,
    InProgress,
    OnHold,
    Resolved,
    Open,
    Closed,
}

impl Status {
    /// Every status in declaration order
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::InProgress,
        Self::OnHold,
        Self::Resolved,
        Self::Open,
        Self::Closed,
    ];

    /// Name as written to the ticket document
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::InProgress => "IN_PROGRESS",
            Self::OnHold => "ON_HOLD",
            Self::Resolved => "RESOLVED",
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TicketError::InvalidStatus(s.to_string()))
    }
}

/// Urgency of a ticket, ordered from lowest to highest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| TicketError::InvalidPriority(s.to_string()))
    }
}

/// A support ticket
///
/// `status` and `priority` are optional so that incomplete tickets coming
/// from forms or hand-edited documents can be represented and then rejected
/// by store validation. Tickets that went through the store always have both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Numeric string assigned by the store on first save
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default)]
    pub status: Option<Status>,

    #[serde(default)]
    pub priority: Option<Priority>,

    /// Set once, when the ticket is first saved
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,

    /// Refreshed on every successful update
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub updated_at: Option<NaiveDateTime>,

    /// Username of the assignee, `None` when unassigned
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Default for Ticket {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            status: None,
            priority: Some(Priority::default()),
            created_at: None,
            updated_at: None,
            assigned_to: None,
            comments: Vec::new(),
        }
    }
}

impl Ticket {
    /// Creates an unassigned ticket in the `NEW` state
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: Some(Status::New),
            priority: Some(priority),
            created_at: Some(created_at),
            updated_at: Some(created_at),
            ..Self::default()
        }
    }

    /// Attaches a comment, binding it to this ticket's id
    pub fn add_comment(&mut self, mut comment: Comment) {
        comment.ticket_id.clone_from(&self.id);
        self.comments.push(comment);
    }

    /// Id as shown to users, empty for unsaved tickets
    #[must_use]
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Numeric value of the id, 0 when missing or not a number
    #[must_use]
    pub fn numeric_id(&self) -> u64 {
        self.id
            .as_deref()
            .and_then(|id| id.parse().ok())
            .unwrap_or(0)
    }

    /// Whether the ticket is assigned to the given username
    #[must_use]
    pub fn is_assigned_to(&self, username: &str) -> bool {
        self.assigned_to.as_deref() == Some(username)
    }
}
