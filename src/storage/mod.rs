//! Ticket storage
//!
//! [`TicketStore`] is the single owner of every ticket and of the id
//! sequence. [`SharedTicketStore`] puts one behind a single lock for hosts
//! that need to share it across threads.

pub mod filter;
mod memory;
mod repository;
mod shared;

pub use filter::{SearchCriteria, TicketPredicate};
pub use memory::TicketStore;
pub use repository::TicketRepository;
pub use shared::SharedTicketStore;
