use super::{Comment, Priority, Status, Ticket, now};
use chrono::NaiveDateTime;

/// Builder for creating Ticket instances
///
/// Unset fields fall back to a fresh ticket: status `NEW`, priority `LOW`,
/// no id and no timestamps, leaving those for the store to assign.
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    status: Option<Status>,
    priority: Option<Priority>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
    assigned_to: Option<String>,
    comments: Vec<Comment>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set `updated_at` timestamp
    #[must_use]
    pub const fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Set assignee
    #[must_use]
    pub fn assigned_to(mut self, username: impl Into<String>) -> Self {
        self.assigned_to = Some(username.into());
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// Build the ticket
    ///
    /// Comments are attached through [`Ticket::add_comment`], so they pick up
    /// the ticket id when one was given.
    pub fn build(self) -> Ticket {
        let mut ticket = Ticket {
            id: self.id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: Some(self.status.unwrap_or(Status::New)),
            priority: Some(self.priority.unwrap_or_default()),
            created_at: self.created_at,
            updated_at: self.updated_at,
            assigned_to: self.assigned_to,
            comments: Vec::with_capacity(self.comments.len()),
        };
        for comment in self.comments {
            ticket.add_comment(comment);
        }
        ticket
    }
}

/// Builder for creating Comment instances
#[derive(Default)]
pub struct CommentBuilder {
    id: Option<String>,
    content: Option<String>,
    created_by: Option<String>,
    created_at: Option<NaiveDateTime>,
}

impl CommentBuilder {
    /// Create a new comment builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the author's username
    #[must_use]
    pub fn created_by(mut self, username: impl Into<String>) -> Self {
        self.created_by = Some(username.into());
        self
    }

    #[must_use]
    pub const fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the comment, timestamped now unless a time was given
    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            ticket_id: None,
            content: self.content.unwrap_or_default(),
            created_by: self.created_by.unwrap_or_default(),
            created_at: Some(self.created_at.unwrap_or_else(now)),
        }
    }
}
