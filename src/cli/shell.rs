//! Interactive menu shell
//!
//! Reads operator input line by line, calls the desk services and renders
//! the results. Works over any `BufRead`/`Write` pair, so the same loop
//! serves a terminal, a pipe or a test buffer.

use super::output::OutputFormatter;
use crate::core::{TicketId, TicketUpdate};
use crate::error::{CallCenterError, Result};
use crate::services::TicketDesk;
use crate::storage::{SearchCriteria, TicketRepository};
use serde_json::json;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// Entries of the main menu, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    ViewAll,
    ViewDetails,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::ViewAll,
        Self::ViewDetails,
        Self::Update,
        Self::Delete,
        Self::Search,
        Self::Exit,
    ];

    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Create => "Create New Ticket",
            Self::ViewAll => "View All Tickets",
            Self::ViewDetails => "View Ticket Details",
            Self::Update => "Update Ticket",
            Self::Delete => "Delete Ticket",
            Self::Search => "Search Tickets",
            Self::Exit => "Exit System",
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The console front end of a [`TicketDesk`]
pub struct Shell<R, I, W> {
    desk: TicketDesk<R>,
    input: I,
    output: OutputFormatter<W>,
}

impl<R, I, W> Shell<R, I, W>
where
    R: TicketRepository,
    I: BufRead,
    W: Write,
{
    pub const fn new(desk: TicketDesk<R>, input: I, output: OutputFormatter<W>) -> Self {
        Self {
            desk,
            input,
            output,
        }
    }

    pub const fn desk(&self) -> &TicketDesk<R> {
        &self.desk
    }

    /// Give back the desk and the output sink
    pub fn into_parts(self) -> (TicketDesk<R>, W) {
        (self.desk, self.output.into_inner())
    }

    /// Run the menu loop until the operator exits or input ends
    pub fn run(&mut self, banner: &str) -> Result<()> {
        if !self.output.is_json() {
            self.output.heading(banner)?;
        }

        loop {
            self.print_menu()?;
            let flow = self.read_number::<u32>("Select option: ").and_then(|number| {
                MenuChoice::from_number(number)
                    .ok_or(CallCenterError::InvalidOption(number))
                    .and_then(|choice| self.dispatch(choice))
            });

            match flow {
                Ok(Flow::Continue) => {},
                Ok(Flow::Exit) | Err(CallCenterError::InputClosed) => break,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }

        if !self.output.is_json() {
            self.output.info("Exiting system...")?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Create => self.create_ticket()?,
            MenuChoice::ViewAll => self.view_all_tickets()?,
            MenuChoice::ViewDetails => self.view_ticket_details()?,
            MenuChoice::Update => self.update_ticket()?,
            MenuChoice::Delete => self.delete_ticket()?,
            MenuChoice::Search => self.search_tickets()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        if self.output.is_json() {
            return Ok(());
        }
        self.output.info("")?;
        self.output.heading("Main Menu:")?;
        for (number, choice) in MenuChoice::ALL.iter().enumerate() {
            self.output.info(&format!("{}. {}", number + 1, choice.label()))?;
        }
        Ok(())
    }

    fn create_ticket(&mut self) -> Result<()> {
        self.section("--- CREATE NEW TICKET ---")?;
        let name = self.ask("Customer Name: ")?;
        let contact = self.ask("Contact Info: ")?;
        let category = self.ask("Category: ")?;
        let description = self.ask("Description: ")?;

        let ticket = self
            .desk
            .creator()
            .open_ticket(name, contact, category, description);

        if self.output.is_json() {
            self.output
                .print_json(&json!({ "status": "success", "ticket": ticket }))
        } else {
            self.output
                .success(&format!("Ticket created successfully! ID: {}", ticket.id))
        }
    }

    fn view_all_tickets(&mut self) -> Result<()> {
        let tickets = self.desk.reader().list_tickets();

        if self.output.is_json() {
            return self
                .output
                .print_json(&json!({ "tickets": tickets, "count": tickets.len() }));
        }
        if tickets.is_empty() {
            return self.output.info("No tickets found.");
        }
        self.section("--- ALL TICKETS ---")?;
        self.output.ticket_table(&tickets)
    }

    fn view_ticket_details(&mut self) -> Result<()> {
        let id = self.read_number::<TicketId>("Enter Ticket ID: ")?;
        let ticket = self
            .desk
            .reader()
            .get_ticket(id)
            .ok_or(CallCenterError::TicketNotFound { id })?;

        if self.output.is_json() {
            return self.output.print_json(&ticket);
        }
        self.section("--- TICKET DETAILS ---")?;
        self.output.ticket_details(&ticket)
    }

    fn update_ticket(&mut self) -> Result<()> {
        let id = self.read_number::<TicketId>("Enter Ticket ID to update: ")?;
        let current = self
            .desk
            .reader()
            .get_ticket(id)
            .ok_or(CallCenterError::TicketNotFound { id })?;

        if !self.output.is_json() {
            self.output
                .info(&format!("Current Status: {}", current.status))?;
        }
        let status = self.ask("New Status (leave blank to keep current): ")?;
        if !self.output.is_json() {
            self.output
                .info(&format!("Current Priority: {}", current.priority))?;
        }
        let priority = self.ask("New Priority (leave blank to keep current): ")?;
        let comment = self.ask("Additional Comments: ")?;

        let update = TicketUpdate::from_form(&status, &priority, &comment);
        let ticket = self
            .desk
            .updater()
            .apply(id, &update)
            .ok_or(CallCenterError::TicketNotFound { id })?;

        if self.output.is_json() {
            self.output
                .print_json(&json!({ "status": "success", "ticket": ticket }))
        } else {
            self.output.success("Ticket updated successfully!")
        }
    }

    fn delete_ticket(&mut self) -> Result<()> {
        let id = self.read_number::<TicketId>("Enter Ticket ID to delete: ")?;
        if !self.desk.remover().delete_ticket(id) {
            return Err(CallCenterError::TicketNotFound { id });
        }

        if self.output.is_json() {
            self.output
                .print_json(&json!({ "status": "success", "deleted": id }))
        } else {
            self.output.success("Ticket deleted successfully!")
        }
    }

    fn search_tickets(&mut self) -> Result<()> {
        self.section("--- SEARCH TICKETS ---")?;
        let criteria = SearchCriteria {
            customer_name: non_blank(self.ask("Customer Name (leave blank to skip): ")?),
            category: non_blank(self.ask("Category (leave blank to skip): ")?),
            status: non_blank(self.ask("Status (leave blank to skip): ")?),
            priority: non_blank(self.ask("Priority (leave blank to skip): ")?),
        };
        let results = self.desk.searcher().search_by(&criteria);

        if self.output.is_json() {
            return self
                .output
                .print_json(&json!({ "tickets": results, "count": results.len() }));
        }
        if results.is_empty() {
            return self.output.info("No matching tickets found.");
        }
        self.section("--- SEARCH RESULTS ---")?;
        self.output.ticket_table(&results)?;
        self.output
            .info(&format!("Found {} ticket(s)", results.len()))
    }

    fn report(&mut self, error: &CallCenterError) -> Result<()> {
        if self.output.is_json() {
            return self.output.print_json(&json!({
                "status": "error",
                "error": error.to_string(),
                "suggestions": error.suggestions(),
            }));
        }
        self.output.error(&error.user_message())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        if self.output.is_json() {
            return Ok(());
        }
        self.output.info("")?;
        self.output.heading(title)
    }

    /// Prompt and read one line, without the line terminator
    ///
    /// Other whitespace is kept as typed.
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.prompt(prompt)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CallCenterError::InputClosed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Prompt until the operator enters something that parses as a number
    fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let line = self.ask(prompt)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.report(&CallCenterError::InvalidInput(
                    "Please enter a number.".to_string(),
                ))?,
            }
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::TicketStore;
    use crate::test_utils::store_with_customers;

    fn run_shell(store: TicketStore, script: &str, json: bool) -> (TicketStore, String) {
        let output = OutputFormatter::new(Vec::new(), json, false);
        let mut shell = Shell::new(TicketDesk::new(store), script.as_bytes(), output);
        shell.run("Test Desk").unwrap();
        let (desk, bytes) = shell.into_parts();
        (desk.into_inner(), String::from_utf8(bytes).unwrap())
    }

    #[test]
    fn test_menu_choice_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::from_number(7), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(8), None);
    }

    #[test]
    fn test_create_and_list() {
        let script = "1\nAlice\nalice@example.com\nNetwork\nRouter down\n2\n7\n";
        let (store, out) = run_shell(TicketStore::new(), script, false);

        assert_eq!(store.len(), 1);
        assert!(out.starts_with("Test Desk\n"));
        assert!(out.contains("Ticket created successfully! ID: 1"));
        assert!(out.contains("--- ALL TICKETS ---"));
        assert!(out.contains("Alice"));
        assert!(out.ends_with("Exiting system...\n"));
    }

    #[test]
    fn test_empty_listing() {
        let (_, out) = run_shell(TicketStore::new(), "2\n7\n", false);
        assert!(out.contains("No tickets found."));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (_, out) = run_shell(TicketStore::new(), "abc\n9\n7\n", false);
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid option. Try again."));
        assert!(out.contains("Exiting system..."));
    }

    #[test]
    fn test_details_of_missing_ticket_recovers() {
        let store = store_with_customers(&[("Alice", "Network")]);
        let (_, out) = run_shell(store, "3\n5\n3\n1\n7\n", false);
        assert!(out.contains("Ticket not found!"));
        assert!(out.contains("--- TICKET DETAILS ---"));
        assert!(out.contains("Customer: Alice"));
    }

    #[test]
    fn test_update_keeps_blank_fields() {
        let store = store_with_customers(&[("Alice", "Network")]);
        let (store, out) = run_shell(store, "4\n1\n\nHigh\ncalled back\n7\n", false);

        let ticket = store.get(TicketId::FIRST).unwrap();
        assert_eq!(ticket.status, "Open");
        assert_eq!(ticket.priority, "High");
        assert_eq!(ticket.comments_text(), "called back");
        assert!(out.contains("Current Status: Open"));
        assert!(out.contains("Ticket updated successfully!"));
    }

    #[test]
    fn test_delete_ticket() {
        let store = store_with_customers(&[("Alice", "Network"), ("Bob", "Billing")]);
        let (store, out) = run_shell(store, "5\n1\n5\n1\n7\n", false);

        assert_eq!(store.len(), 1);
        assert!(out.contains("Ticket deleted successfully!"));
        assert!(out.contains("Ticket not found!"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let store = store_with_customers(&[("Alice", "Network"), ("Bob", "Billing")]);
        let (_, out) = run_shell(store, "6\n\nbilling\n\n\n6\nzed\n\n\n\n7\n", false);

        assert!(out.contains("--- SEARCH RESULTS ---"));
        assert!(out.contains("Found 1 ticket(s)"));
        assert!(out.contains("No matching tickets found."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (store, out) = run_shell(TicketStore::new(), "1\nAlice\n", false);
        assert!(store.is_empty());
        assert!(out.ends_with("Exiting system...\n"));
    }

    #[test]
    fn test_json_mode() {
        let store = store_with_customers(&[("Alice", "Network")]);
        let (_, out) = run_shell(store, "2\n3\n4\n9\n7\n", true);

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["count"], 1);
        assert_eq!(lines[0]["tickets"][0]["customer_name"], "Alice");
        assert_eq!(lines[1]["status"], "error");
        assert_eq!(lines[2]["status"], "error");
        assert_eq!(lines[2]["error"], "Invalid option: 9");
    }

    #[test]
    fn test_answers_keep_surrounding_whitespace() {
        let script = "1\n  Alice  \r\nalice@example.com\nNetwork\nRouter down\n 2 \n6\n  Alice  \n \n\n\n7\n";
        let (store, out) = run_shell(TicketStore::new(), script, false);

        let ticket = store.get(TicketId::FIRST).unwrap();
        assert_eq!(ticket.customer_name, "  Alice  ");
        assert_eq!(ticket.contact_info, "alice@example.com");
        assert!(out.contains("--- ALL TICKETS ---"));
        assert!(out.contains("Found 1 ticket(s)"));
    }
}
