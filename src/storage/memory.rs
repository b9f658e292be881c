use super::repository::TicketRepository;
use crate::core::{Ticket, TicketId};
use tracing::debug;

/// In-memory owner of all tickets and the id sequence
///
/// Tickets are kept in insertion order. Updates replace a record in its
/// slot; deletions close the gap without reordering the rest.
#[derive(Debug, Clone)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
    next_id: TicketId,
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TicketStore {
    /// Create an empty store whose sequence starts at 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tickets: Vec::new(),
            next_id: TicketId::FIRST,
        }
    }

    /// Borrow the stored tickets without copying them
    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    fn position(&self, id: TicketId) -> Option<usize> {
        self.tickets.iter().position(|ticket| ticket.id == id)
    }
}

impl TicketRepository for TicketStore {
    fn create(&mut self, ticket: Ticket) {
        debug!(id = %ticket.id, "storing ticket");
        self.tickets.push(ticket);
    }

    fn next_id(&mut self) -> TicketId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn get(&self, id: TicketId) -> Option<Ticket> {
        self.iter().find(|ticket| ticket.id == id).cloned()
    }

    fn get_all(&self) -> Vec<Ticket> {
        self.tickets.clone()
    }

    fn update(&mut self, ticket: Ticket) -> bool {
        match self.position(ticket.id) {
            Some(index) => {
                debug!(id = %ticket.id, "replacing ticket");
                self.tickets[index] = ticket;
                true
            },
            None => {
                debug!(id = %ticket.id, "update ignored, no such ticket");
                false
            },
        }
    }

    fn delete(&mut self, id: TicketId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.tickets.remove(index);
                debug!(%id, "removed ticket");
                true
            },
            None => false,
        }
    }

    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.iter().filter(|ticket| predicate(ticket)).cloned().collect()
    }

    fn len(&self) -> usize {
        self.tickets.len()
    }

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Ticket) -> bool,
    {
        self.iter().filter(|ticket| predicate(ticket)).count()
    }
}
