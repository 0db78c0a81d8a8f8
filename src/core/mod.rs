//! Domain model: tickets, their comments, and user accounts

mod builders;
mod comment;
mod ticket;
mod user;

pub use builders::{CommentBuilder, TicketBuilder};
pub use comment::Comment;
pub use ticket::{Priority, Status, Ticket};
pub use user::{Role, User};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Format used when showing timestamps to people
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current local wall-clock time, without timezone
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Accepted layouts of stored timestamps; seconds may be left out entirely
const STORED_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses an ISO-8601 local date-time, with or without seconds
#[must_use]
pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    STORED_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

/// Reads an optional timestamp written with or without seconds
fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|text| {
            parse_timestamp(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {text}")))
        })
        .transpose()
}

/// Reads an explicit `null` as the type's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
