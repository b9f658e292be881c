use crate::core::{Ticket, TicketId};
use crate::storage::TicketRepository;
use tracing::info;

/// Creates tickets
pub struct CreateService<'a, R> {
    repository: &'a mut R,
}

impl<'a, R: TicketRepository> CreateService<'a, R> {
    pub const fn new(repository: &'a mut R) -> Self {
        Self { repository }
    }

    /// Draw the next id from the store's sequence
    pub fn next_id(&mut self) -> TicketId {
        self.repository.next_id()
    }

    /// Store a pre-built ticket as-is and return a copy of it
    pub fn create(&mut self, ticket: Ticket) -> Ticket {
        info!(id = %ticket.id, category = %ticket.category, "ticket created");
        self.repository.create(ticket.clone());
        ticket
    }

    /// Create a ticket with defaults under an id obtained from `next_id`
    pub fn create_ticket(
        &mut self,
        id: TicketId,
        customer_name: impl Into<String>,
        contact_info: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Ticket {
        self.create(Ticket::new(
            id,
            customer_name,
            contact_info,
            category,
            description,
        ))
    }

    /// Draw an id and create the ticket in one step
    pub fn open_ticket(
        &mut self,
        customer_name: impl Into<String>,
        contact_info: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Ticket {
        let (customer_name, contact_info) = (customer_name.into(), contact_info.into());
        let (category, description) = (category.into(), description.into());
        let ticket = self.repository.create_next(|id| {
            Ticket::new(id, customer_name, contact_info, category, description)
        });
        info!(id = %ticket.id, category = %ticket.category, "ticket created");
        ticket
    }
}
