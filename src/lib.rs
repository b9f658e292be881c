//! callcenter-ticket - An in-memory support ticket desk
//!
//! This crate keeps a call center's support tickets in memory and answers
//! lookups, full listings and searches over them:
//! - A single store owning every ticket and the id sequence
//! - Predicate-based search with a case-insensitive field shortcut
//! - Capability-scoped services for the create/read/update/delete paths
//! - An interactive console shell on top of the services

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Concurrency
//!
//! [`storage::TicketStore`] assumes one caller at a time. Hosts that share a
//! store across threads use [`storage::SharedTicketStore`], which guards the
//! collection and the id sequence with a single lock so that drawing an id
//! and storing the ticket happen together.
//!
//! # Example
//!
//! ```rust
//! use callcenter_ticket::services::TicketDesk;
//! use callcenter_ticket::storage::SearchCriteria;
//!
//! let mut desk: TicketDesk = TicketDesk::default();
//! let ticket = desk
//!     .creator()
//!     .open_ticket("Alice", "alice@example.com", "Network", "Router down");
//!
//! desk.updater().append_comment(ticket.id, "called back");
//!
//! let found = desk
//!     .searcher()
//!     .search_by(&SearchCriteria::new().category("network"));
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].comments_text(), "called back");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{CallCenterError, Result};
