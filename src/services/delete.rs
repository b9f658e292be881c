use crate::core::TicketId;
use crate::storage::TicketRepository;
use tracing::info;

/// Deletes tickets
pub struct DeleteService<'a, R> {
    repository: &'a mut R,
}

impl<'a, R: TicketRepository> DeleteService<'a, R> {
    pub const fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Remove a ticket, returning true iff it existed
    pub fn delete_ticket(&mut self, id: TicketId) -> bool {
        let removed = self.repository.delete(id);
        if removed {
            info!(%id, "ticket deleted");
        }
        removed
    }
}
