use crate::core::{Ticket, TicketId, TicketUpdate};
use crate::storage::TicketRepository;
use tracing::info;

/// Updates tickets
///
/// Every edit is read-modify-write: load a copy, change it, hand the whole
/// record back to the repository. Methods return the updated copy, or `None`
/// when no ticket has the id.
pub struct UpdateService<'a, R> {
    repository: &'a mut R,
}

impl<'a, R: TicketRepository> UpdateService<'a, R> {
    pub const fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Replace a whole record; a missing id is a silent no-op
    pub fn update(&mut self, ticket: Ticket) -> bool {
        self.repository.update(ticket)
    }

    pub fn set_status(&mut self, id: TicketId, status: impl Into<String>) -> Option<Ticket> {
        let status = status.into();
        self.modify(id, |ticket| ticket.set_status(status))
    }

    pub fn set_priority(&mut self, id: TicketId, priority: impl Into<String>) -> Option<Ticket> {
        let priority = priority.into();
        self.modify(id, |ticket| ticket.set_priority(priority))
    }

    pub fn append_comment(&mut self, id: TicketId, comment: impl Into<String>) -> Option<Ticket> {
        let comment = comment.into();
        self.modify(id, |ticket| ticket.add_comment(comment))
    }

    /// Apply a combined edit from the update form
    pub fn apply(&mut self, id: TicketId, update: &TicketUpdate) -> Option<Ticket> {
        self.modify(id, |ticket| update.apply_to(ticket))
    }

    fn modify(&mut self, id: TicketId, edit: impl FnOnce(&mut Ticket)) -> Option<Ticket> {
        let mut ticket = self.repository.get(id)?;
        edit(&mut ticket);
        self.repository.update(ticket.clone());
        info!(%id, status = %ticket.status, priority = %ticket.priority, "ticket updated");
        Some(ticket)
    }
}
