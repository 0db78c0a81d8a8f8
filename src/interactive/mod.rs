//! Interactive ticket forms
//!
//! Guided prompts for creating and editing tickets. Titles are required and
//! priorities are picked from a list, so a completed form always passes store
//! validation.

use crate::core::{Priority, Status, Ticket};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

const UNASSIGNED: &str = "(unassigned)";

/// Values collected by the new-ticket form
#[derive(Debug, Clone)]
pub struct NewTicketData {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assigned_to: Option<String>,
}

/// Prompt-driven forms
pub struct InteractiveMode {
    theme: ColorfulTheme,
}

impl Default for InteractiveMode {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveMode {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Run the new-ticket form
    pub fn create_ticket(&self, usernames: &[String]) -> Result<NewTicketData> {
        println!("Create a new ticket\n");

        let title = self.title("")?;

        let description = Input::<String>::with_theme(&self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;

        let priority = self.priority(Priority::default())?;
        let assigned_to = self.assignee(usernames, None)?;

        Ok(NewTicketData {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            priority,
            assigned_to,
        })
    }

    /// Run the edit form, changing `ticket` in place
    pub fn edit_ticket(&self, ticket: &mut Ticket, usernames: &[String]) -> Result<()> {
        println!("Edit ticket #{}\n", ticket.id_str());

        ticket.title = self.title(&ticket.title)?.trim().to_string();

        let statuses: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
        let current = ticket
            .status
            .and_then(|s| Status::ALL.iter().position(|candidate| *candidate == s))
            .unwrap_or(0);
        let index = Select::with_theme(&self.theme)
            .with_prompt("Status")
            .items(&statuses)
            .default(current)
            .interact()?;
        ticket.status = Some(Status::ALL[index]);

        ticket.priority = Some(self.priority(ticket.priority.unwrap_or_default())?);
        ticket.assigned_to = self.assignee(usernames, ticket.assigned_to.as_deref())?;

        let description = Input::<String>::with_theme(&self.theme)
            .with_prompt("Description")
            .with_initial_text(ticket.description.clone())
            .allow_empty(true)
            .interact_text()?;
        ticket.description = description.trim().to_string();

        Ok(())
    }

    /// Ask a yes/no question, defaulting to no
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn title(&self, initial: &str) -> Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt("Title")
            .with_initial_text(initial)
            .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
                if input.trim().is_empty() {
                    Err("Title is required!")
                } else {
                    Ok(())
                }
            })
            .interact_text()?)
    }

    fn priority(&self, initial: Priority) -> Result<Priority> {
        let labels: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
        let current = Priority::ALL
            .iter()
            .position(|p| *p == initial)
            .unwrap_or(0);

        let index = Select::with_theme(&self.theme)
            .with_prompt("Priority")
            .items(&labels)
            .default(current)
            .interact()?;
        Ok(Priority::ALL[index])
    }

    fn assignee(&self, usernames: &[String], current: Option<&str>) -> Result<Option<String>> {
        let (choices, selected) = assignee_choices(usernames, current);

        let index = Select::with_theme(&self.theme)
            .with_prompt("Assigned to")
            .items(&choices)
            .default(selected)
            .interact()?;

        Ok((index > 0).then(|| choices[index].clone()))
    }
}

/// Choices for the assignee select and the index to preselect
///
/// Index 0 is always "unassigned". A current assignee missing from the
/// roster is kept as an extra choice so confirming the form preserves it.
fn assignee_choices(usernames: &[String], current: Option<&str>) -> (Vec<String>, usize) {
    let mut choices = vec![UNASSIGNED.to_string()];
    choices.extend(usernames.iter().cloned());

    let Some(name) = current else {
        return (choices, 0);
    };
    match usernames.iter().position(|c| c == name) {
        Some(index) => (choices, index + 1),
        None => {
            choices.push(name.to_string());
            let index = choices.len() - 1;
            (choices, index)
        },
    }
}
