use crate::core::Ticket;
use crate::storage::{SearchCriteria, TicketRepository};

/// Searches tickets
pub struct SearchService<'a, R> {
    repository: &'a R,
}

impl<'a, R: TicketRepository> SearchService<'a, R> {
    pub const fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Tickets for which the predicate holds, in store order
    pub fn search<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        self.repository.find(predicate)
    }

    /// Tickets matching every supplied field, ignoring case
    pub fn search_by(&self, criteria: &SearchCriteria) -> Vec<Ticket> {
        self.repository.find_by_fields(criteria)
    }
}
