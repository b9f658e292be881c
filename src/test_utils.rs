//! Test utilities for callcenter-ticket
//!
//! Common fixtures shared by the unit tests of the storage, service and
//! shell modules.

#![cfg(test)]

use crate::core::{Ticket, TicketBuilder, TicketId};
use crate::storage::{TicketRepository, TicketStore};

/// Create a test ticket with default status, priority and no comments
pub fn create_test_ticket(id: u64, customer_name: &str, category: &str) -> Ticket {
    TicketBuilder::new()
        .id(TicketId::new(id))
        .customer_name(customer_name)
        .contact_info(format!("{}@example.com", customer_name.to_lowercase()))
        .category(category)
        .description(format!("{category} issue reported by {customer_name}"))
        .build()
}

/// Create a store holding one ticket per `(customer, category)` pair,
/// with ids 1..=n in the given order
pub fn store_with_customers(customers: &[(&str, &str)]) -> TicketStore {
    let mut store = TicketStore::new();
    for (name, category) in customers {
        store.create_next(|id| create_test_ticket(id.value(), name, category));
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_with_customers() {
        let store = store_with_customers(&[("Alice", "Network"), ("Bob", "Billing")]);
        assert_eq!(store.len(), 2);

        let bob = store.get(TicketId::new(2)).unwrap();
        assert_eq!(bob.customer_name, "Bob");
        assert_eq!(bob.contact_info, "bob@example.com");
    }
}
