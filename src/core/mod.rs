//! Core domain types
//!
//! A [`Ticket`] is the only entity on the desk. It carries no references to
//! other records, so everything the store hands out can be a plain value copy.

mod builders;
mod ticket;

pub use builders::TicketBuilder;
pub use ticket::{DEFAULT_PRIORITY, DEFAULT_STATUS, Ticket, TicketId, TicketUpdate};
