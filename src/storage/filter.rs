//! Ticket predicates
//!
//! Searching is always a predicate over a single ticket. [`SearchCriteria`]
//! is the common fixed-field case; the combinators below let callers build
//! anything else without touching the store.

use crate::core::Ticket;

/// A boxed ticket predicate, for searches assembled at runtime
pub type TicketPredicate<'a> = Box<dyn Fn(&Ticket) -> bool + 'a>;

/// Compare two strings ignoring case, character by character
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Matches when every predicate matches (and when there are none)
pub fn all_of<'a>(predicates: Vec<TicketPredicate<'a>>) -> TicketPredicate<'a> {
    Box::new(move |ticket| predicates.iter().all(|p| p(ticket)))
}

/// Matches when at least one predicate matches
pub fn any_of<'a>(predicates: Vec<TicketPredicate<'a>>) -> TicketPredicate<'a> {
    Box::new(move |ticket| predicates.iter().any(|p| p(ticket)))
}

/// Inverts a predicate
pub fn negate<'a>(predicate: TicketPredicate<'a>) -> TicketPredicate<'a> {
    Box::new(move |ticket| !predicate(ticket))
}

/// Field criteria combined with AND
///
/// Absent or empty fields are "don't care"; supplied fields require a
/// case-insensitive match against the ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub customer_name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl SearchCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// True when no field constrains the search
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        [
            &self.customer_name,
            &self.category,
            &self.status,
            &self.priority,
        ]
        .into_iter()
        .all(|field| field.as_deref().is_none_or(str::is_empty))
    }

    /// Check if a ticket satisfies every supplied field
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        field_matches(self.customer_name.as_deref(), &ticket.customer_name)
            && field_matches(self.category.as_deref(), &ticket.category)
            && field_matches(self.status.as_deref(), &ticket.status)
            && field_matches(self.priority.as_deref(), &ticket.priority)
    }

    /// Turn the criteria into a boxed predicate for composition
    #[must_use]
    pub fn into_predicate<'a>(self) -> TicketPredicate<'a> {
        Box::new(move |ticket| self.matches(ticket))
    }
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(wanted) if !wanted.is_empty() => eq_ignore_case(wanted, actual),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_ticket;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Billing", "BILLING"));
        assert!(eq_ignore_case("billing", "Billing"));
        assert!(eq_ignore_case("ÉCOLE", "école"));
        assert!(!eq_ignore_case("Billing", "Billings"));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let ticket = create_test_ticket(1, "Alice", "Network");
        assert!(SearchCriteria::new().matches(&ticket));
        assert!(SearchCriteria::new().is_unconstrained());

        let blank = SearchCriteria::new().customer_name("").status("");
        assert!(blank.is_unconstrained());
        assert!(blank.matches(&ticket));
    }

    #[test]
    fn test_criteria_are_anded() {
        let ticket = create_test_ticket(1, "Alice", "Network");
        let hit = SearchCriteria::new().customer_name("alice").category("NETWORK");
        let miss = SearchCriteria::new().customer_name("alice").category("Billing");
        assert!(hit.matches(&ticket));
        assert!(!miss.matches(&ticket));
    }

    #[test]
    fn test_priority_criterion() {
        let mut ticket = create_test_ticket(1, "Alice", "Network");
        ticket.priority = "High".to_string();
        assert!(SearchCriteria::new().priority("high").matches(&ticket));
        assert!(!SearchCriteria::new().priority("low").matches(&ticket));
    }

    #[test]
    fn test_combinators() {
        let alice = create_test_ticket(1, "Alice", "Network");
        let bob = create_test_ticket(2, "Bob", "Billing");

        let either = any_of(vec![
            SearchCriteria::new().customer_name("alice").into_predicate(),
            SearchCriteria::new().category("billing").into_predicate(),
        ]);
        assert!(either(&alice));
        assert!(either(&bob));

        let not_bob = negate(SearchCriteria::new().customer_name("bob").into_predicate());
        assert!(not_bob(&alice));
        assert!(!not_bob(&bob));

        let nothing = all_of(vec![]);
        assert!(nothing(&alice));
        let never = any_of(vec![]);
        assert!(!never(&alice));
    }
}
