use crate::core::{Ticket, TicketId};
use crate::storage::TicketRepository;

/// Reads tickets
pub struct ReadService<'a, R> {
    repository: &'a R,
}

impl<'a, R: TicketRepository> ReadService<'a, R> {
    pub const fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// All tickets in creation order
    pub fn list_tickets(&self) -> Vec<Ticket> {
        self.repository.get_all()
    }

    pub fn get_ticket(&self, id: TicketId) -> Option<Ticket> {
        self.repository.get(id)
    }
}
