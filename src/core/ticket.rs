use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Status given to every new ticket
pub const DEFAULT_STATUS: &str = "Open";

/// Priority given to every new ticket
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Identifier of a ticket
///
/// Ids are handed out by the store's sequence, starting at 1, and are never
/// reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(u64);

impl TicketId {
    /// First id produced by a fresh sequence
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Upper end of the id range
    pub const MAX: Self = Self(u64::MAX);

    /// The id that follows this one in the sequence
    ///
    /// # Panics
    ///
    /// Panics when called on [`TicketId::MAX`]. Ids are never reused, so an
    /// exhausted sequence cannot wrap around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self.0.checked_add(1) {
            Some(value) => Self(value),
            None => panic!("ticket id sequence exhausted"),
        }
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TicketId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u64> for TicketId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A customer support request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub customer_name: String,
    pub contact_info: String,
    pub category: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    /// Append-only comment log, oldest first
    pub comments: Vec<String>,
}

impl Ticket {
    /// Create a ticket with the default status, priority and no comments
    pub fn new(
        id: TicketId,
        customer_name: impl Into<String>,
        contact_info: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            contact_info: contact_info.into(),
            category: category.into(),
            description: description.into(),
            status: DEFAULT_STATUS.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            comments: Vec::new(),
        }
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn set_priority(&mut self, priority: impl Into<String>) {
        self.priority = priority.into();
    }

    /// Append a comment to the end of the log
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    /// Comments joined with newlines, empty when there are none
    #[must_use]
    pub fn comments_text(&self) -> String {
        self.comments.join("\n")
    }
}

/// A partial edit of the mutable fields of a ticket
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketUpdate {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub comment: Option<String>,
}

impl TicketUpdate {
    /// Build an update from raw form input, treating blank entries as "keep"
    #[must_use]
    pub fn from_form(status: &str, priority: &str, comment: &str) -> Self {
        fn non_blank(value: &str) -> Option<String> {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }

        Self {
            status: non_blank(status),
            priority: non_blank(priority),
            comment: non_blank(comment),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none() && self.comment.is_none()
    }

    /// Apply this edit to a ticket in place
    pub fn apply_to(&self, ticket: &mut Ticket) {
        if let Some(status) = &self.status {
            ticket.set_status(status.clone());
        }
        if let Some(priority) = &self.priority {
            ticket.set_priority(priority.clone());
        }
        if let Some(comment) = &self.comment {
            ticket.add_comment(comment.clone());
        }
    }
}
