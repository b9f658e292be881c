use super::{DEFAULT_PRIORITY, DEFAULT_STATUS, Ticket, TicketId};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    customer_name: Option<String>,
    contact_info: Option<String>,
    category: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    comments: Vec<String>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the customer name
    #[must_use]
    pub fn customer_name(mut self, customer_name: impl Into<String>) -> Self {
        self.customer_name = Some(customer_name.into());
        self
    }

    /// Set the contact info
    #[must_use]
    pub fn contact_info(mut self, contact_info: impl Into<String>) -> Self {
        self.contact_info = Some(contact_info.into());
        self
    }

    /// Set the category
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Add a single comment
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Build the ticket
    ///
    /// Without an explicit id the ticket gets [`TicketId::FIRST`]; callers
    /// storing it should take an id from the store's sequence first.
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or(TicketId::FIRST),
            customer_name: self.customer_name.unwrap_or_default(),
            contact_info: self.contact_info.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            priority: self.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            comments: self.comments,
        }
    }
}
