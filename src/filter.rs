//! Ticket list filtering
//!
//! A ticket passes when the free-text query matches its title, id, status
//! name or assignee, and it has the selected status and priority (if any).

use crate::core::{Priority, Status, Ticket};
use crate::error::TicketError;
use std::str::FromStr;

/// Sort options for tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Id,
    Created,
    Updated,
    Priority,
    Status,
    Title,
}

impl FromStr for SortBy {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "priority" => Ok(Self::Priority),
            "status" => Ok(Self::Status),
            "title" => Ok(Self::Title),
            other => Err(TicketError::InvalidInput(format!(
                "Unknown sort key '{other}'. Use id, created, updated, priority, status or title"
            ))),
        }
    }
}

/// Query and filters applied to a ticket list
///
/// Without a sort key the input order is preserved.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub query: String,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub sort_by: Option<SortBy>,
    pub reverse: bool,
    pub limit: Option<usize>,
}

impl TicketFilter {
    /// Filter with only a free-text query
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Apply all filters to a list of tickets
    #[must_use]
    pub fn apply(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let needle = self.query.trim().to_lowercase();

        let mut matched: Vec<Ticket> = tickets
            .iter()
            .filter(|ticket| self.matches_normalized(ticket, &needle))
            .cloned()
            .collect();

        if let Some(sort_by) = self.sort_by {
            sort(&mut matched, sort_by);
        }
        if self.reverse {
            matched.reverse();
        }
        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        matched
    }

    /// Check if a ticket matches all filter criteria
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.matches_normalized(ticket, &self.query.trim().to_lowercase())
    }

    fn matches_normalized(&self, ticket: &Ticket, needle: &str) -> bool {
        if let Some(status) = self.status {
            if ticket.status != Some(status) {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != Some(priority) {
                return false;
            }
        }

        needle.is_empty() || text_matches(ticket, needle)
    }
}

/// `needle` must already be trimmed and lower-cased
fn text_matches(ticket: &Ticket, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&ticket.title)
        || ticket.id.as_deref().is_some_and(contains)
        || ticket.status.is_some_and(|s| contains(s.as_str()))
        || ticket.assigned_to.as_deref().is_some_and(contains)
}

fn sort(tickets: &mut [Ticket], sort_by: SortBy) {
    // stable, so ties keep their stored order
    tickets.sort_by(|a, b| match sort_by {
        SortBy::Id => a.numeric_id().cmp(&b.numeric_id()),
        SortBy::Created => a.created_at.cmp(&b.created_at),
        SortBy::Updated => a.updated_at.cmp(&b.updated_at),
        SortBy::Priority => b.priority.cmp(&a.priority), // Higher priority first
        SortBy::Status => a.status.cmp(&b.status),
        SortBy::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    });
}
