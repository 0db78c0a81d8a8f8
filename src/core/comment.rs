use super::{DISPLAY_TIME_FORMAT, now, optional_timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A note attached to a single ticket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: Option<String>,

    /// Id of the owning ticket, filled in by [`super::Ticket::add_comment`]
    #[serde(default)]
    pub ticket_id: Option<String>,

    #[serde(default)]
    pub content: String,

    /// Username of the author
    #[serde(default)]
    pub created_by: String,

    #[serde(default, deserialize_with = "optional_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Comment {
    /// Creates a comment timestamped now
    pub fn new(content: impl Into<String>, created_by: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            created_by: created_by.into(),
            created_at: Some(now()),
            ..Self::default()
        }
    }

    /// Numeric value of the id, 0 when missing or not a number
    #[must_use]
    pub fn numeric_id(&self) -> u64 {
        self.id
            .as_deref()
            .and_then(|id| id.parse().ok())
            .unwrap_or(0)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let when = self
            .created_at
            .map(|at| at.format(DISPLAY_TIME_FORMAT).to_string())
            .unwrap_or_default();
        write!(f, "[{when}] {}: {}", self.created_by, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_comment_is_timestamped() {
        let comment = Comment::new("Rebooted the router", "support1");
        assert!(comment.created_at.is_some());
        assert!(comment.id.is_none());
        assert!(comment.ticket_id.is_none());
    }

    #[test]
    fn test_display_format() {
        let comment = Comment {
            content: "Waiting on customer".to_string(),
            created_by: "support2".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9)
                .and_then(|d| d.and_hms_opt(14, 5, 59)),
            ..Comment::default()
        };
        assert_eq!(
            comment.to_string(),
            "[2024-03-09 14:05] support2: Waiting on customer"
        );
    }

    #[test]
    fn test_json_field_names() {
        let mut comment = Comment::new("hello", "admin");
        comment.ticket_id = Some("5".to_string());
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["ticketId"], "5");
        assert_eq!(json["createdBy"], "admin");
        assert!(json["createdAt"].is_string());
    }
}
