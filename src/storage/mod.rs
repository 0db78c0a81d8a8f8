//! Ticket persistence
//!
//! [`JsonTicketStore`] keeps the whole collection in memory and mirrors it
//! to one JSON document; [`TicketRepository`] is the interface front-ends
//! program against.

mod json;
mod repository;

pub use json::{JsonTicketStore, validate};
pub use repository::TicketRepository;
