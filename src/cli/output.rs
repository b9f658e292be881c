//! Output formatting for the console shell

use crate::core::Ticket;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Writes shell output as styled text or JSON
pub struct OutputFormatter<W> {
    out: W,
    json: bool,
    color: bool,
}

impl<W: Write> OutputFormatter<W> {
    pub const fn new(out: W, json: bool, color: bool) -> Self {
        Self { out, json, color }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a plain line
    pub fn info(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        let line = if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        };
        self.info(&line)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        let line = if self.color {
            message.red().to_string()
        } else {
            message.to_string()
        };
        self.info(&line)
    }

    pub fn heading(&mut self, message: &str) -> Result<()> {
        let line = if self.color {
            message.bold().to_string()
        } else {
            message.to_string()
        };
        self.info(&line)
    }

    /// Print a prompt without a trailing newline. Silent in JSON mode.
    pub fn prompt(&mut self, message: &str) -> Result<()> {
        if !self.json {
            write!(self.out, "{message}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Print a value as one line of JSON
    pub fn print_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Print tickets as the ID/Customer/Category/Status table
    pub fn ticket_table(&mut self, tickets: &[Ticket]) -> Result<()> {
        self.heading(&format!(
            "{:<6}{:<22}{:<17}{}",
            "ID", "Customer", "Category", "Status"
        ))?;
        self.info(&"-".repeat(52))?;
        for ticket in tickets {
            self.info(&format!(
                "{:<6}{:<22}{:<17}{}",
                ticket.id, ticket.customer_name, ticket.category, ticket.status
            ))?;
        }
        Ok(())
    }

    /// Print every field of one ticket
    pub fn ticket_details(&mut self, ticket: &Ticket) -> Result<()> {
        let comments = if ticket.comments.is_empty() {
            "No comments".to_string()
        } else {
            ticket.comments_text()
        };
        self.info(&format!("ID: {}", ticket.id))?;
        self.info(&format!("Customer: {}", ticket.customer_name))?;
        self.info(&format!("Contact: {}", ticket.contact_info))?;
        self.info(&format!("Category: {}", ticket.category))?;
        self.info(&format!("Description: {}", ticket.description))?;
        self.info(&format!("Status: {}", ticket.status))?;
        self.info(&format!("Priority: {}", ticket.priority))?;
        self.info("Comments:")?;
        self.info(&comments)?;
        self.info(&"-".repeat(34))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
