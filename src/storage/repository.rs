use super::filter::SearchCriteria;
use crate::core::{Ticket, TicketId};

/// Repository trait for ticket storage operations
///
/// Not-found is an expected outcome: lookups return `Option` and deletion
/// returns `bool`. Nothing here fails. Every ticket handed out is an owned
/// copy, so changing it has no effect until it is passed back to `update`.
pub trait TicketRepository {
    /// Appends a ticket. No duplicate-id check is made; take ids from
    /// `next_id` or use `create_next`.
    fn create(&mut self, ticket: Ticket);

    /// Returns the current sequence value and advances the sequence
    fn next_id(&mut self) -> TicketId;

    /// Loads a ticket by ID
    fn get(&self, id: TicketId) -> Option<Ticket>;

    /// Loads all tickets in insertion order
    fn get_all(&self) -> Vec<Ticket>;

    /// Replaces the ticket with the same id in place.
    ///
    /// Returns false, leaving the store untouched, when no ticket matches.
    fn update(&mut self, ticket: Ticket) -> bool;

    /// Deletes a ticket by ID, returning whether one was removed
    fn delete(&mut self, id: TicketId) -> bool;

    /// Finds tickets matching a predicate, in store order
    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool;

    /// Number of stored tickets
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds tickets matching the given field criteria
    fn find_by_fields(&self, criteria: &SearchCriteria) -> Vec<Ticket> {
        self.find(|ticket| criteria.matches(ticket))
    }

    /// Checks if a ticket exists by ID
    fn exists(&self, id: TicketId) -> bool {
        self.get(id).is_some()
    }

    /// Counts tickets matching a predicate
    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool,
    {
        self.find(predicate).len()
    }

    /// Draws the next id and stores the ticket built from it
    fn create_next<F>(&mut self, build: F) -> Ticket
    where
        F: FnOnce(TicketId) -> Ticket,
    {
        let ticket = build(self.next_id());
        self.create(ticket.clone());
        ticket
    }
}
