use super::json::JsonTicketStore;
use crate::core::Ticket;
use crate::error::Result;

/// Repository trait for ticket storage operations
///
/// This trait defines the interface front-ends use to read and change the
/// ticket collection, independent of how it is persisted.
pub trait TicketRepository {
    /// Copy of every ticket in stored order
    fn all(&self) -> Vec<Ticket>;

    /// Loads a ticket by ID
    fn get(&self, id: &str) -> Option<Ticket>;

    /// Stores a new ticket, assigning an id if it has none
    fn create(&mut self, ticket: Ticket) -> Result<Ticket>;

    /// Replaces an existing ticket
    fn update(&mut self, ticket: Ticket) -> Result<Ticket>;

    /// Deletes the ticket with the same id
    fn delete(&mut self, ticket: &Ticket) -> Result<()>;

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Finds tickets matching a predicate
    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.all().into_iter().filter(predicate).collect()
    }

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool,
    {
        self.all().iter().filter(|t| predicate(t)).count()
    }
}

impl TicketRepository for JsonTicketStore {
    fn all(&self) -> Vec<Ticket> {
        self.get_all_tickets()
    }

    fn get(&self, id: &str) -> Option<Ticket> {
        self.find_ticket(id)
    }

    fn create(&mut self, ticket: Ticket) -> Result<Ticket> {
        self.save_ticket(ticket)
    }

    fn update(&mut self, ticket: Ticket) -> Result<Ticket> {
        self.update_ticket(ticket)
    }

    fn delete(&mut self, ticket: &Ticket) -> Result<()> {
        self.delete_ticket(ticket)
    }
}
