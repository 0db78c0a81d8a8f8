//! New-ticket command handler
//!
//! Tickets can be created straight from arguments, or through the
//! interactive form when no title is given.

use super::common::{HandlerContext, parse_priority};
use crate::cli::output::OutputFormatter;
use crate::core::{Ticket, now};
use crate::error::Result;
use crate::interactive::{InteractiveMode, NewTicketData};

/// Parameters for creating a ticket
#[derive(Debug, Default)]
pub struct CreateParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub assign: Option<String>,
}

/// Handle the new command
pub fn handle_new_command(
    params: CreateParams,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let data = match params.title {
        Some(title) => NewTicketData {
            title,
            description: params.description.unwrap_or_default(),
            priority: parse_priority(params.priority.as_deref())?.unwrap_or_default(),
            assigned_to: params.assign,
        },
        None => InteractiveMode::new().create_ticket(&ctx.users.usernames())?,
    };

    let ticket = build_ticket(data, ctx)?;
    let saved = ctx.store.save_ticket(ticket)?;

    if output.is_json() {
        return output.print_json(&saved);
    }
    output.success(&format!(
        "Created ticket #{} '{}'",
        saved.id_str(),
        saved.title
    ));

    Ok(())
}

fn build_ticket(data: NewTicketData, ctx: &HandlerContext) -> Result<Ticket> {
    let mut ticket = Ticket::new(data.title.trim(), data.description, data.priority, now());
    ticket.assigned_to = data
        .assigned_to
        .map(|username| ctx.resolve_username(&username))
        .transpose()?;
    Ok(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::{Priority, Status};
    use crate::error::TicketError;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> HandlerContext {
        let path = temp_dir.path().join("tickets.json");
        HandlerContext::new(&Config::default(), Some(path.as_path()), None).unwrap()
    }

    #[test]
    fn test_new_ticket_from_arguments() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        let output = OutputFormatter::new(true, true);

        let params = CreateParams {
            title: Some("Printer offline".to_string()),
            priority: Some("high".to_string()),
            assign: Some("support2".to_string()),
            ..CreateParams::default()
        };
        handle_new_command(params, &mut ctx, &output).unwrap();

        let ticket = ctx.load_ticket("1").unwrap();
        assert_eq!(ticket.title, "Printer offline");
        assert_eq!(ticket.status, Some(Status::New));
        assert_eq!(ticket.priority, Some(Priority::High));
        assert_eq!(ticket.assigned_to.as_deref(), Some("support2"));
    }

    #[test]
    fn test_new_ticket_defaults_to_low_priority() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        let output = OutputFormatter::new(true, true);

        let params = CreateParams {
            title: Some("Keyboard sticky".to_string()),
            ..CreateParams::default()
        };
        handle_new_command(params, &mut ctx, &output).unwrap();

        assert_eq!(ctx.load_ticket("1").unwrap().priority, Some(Priority::Low));
    }

    #[test]
    fn test_unknown_assignee_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        let output = OutputFormatter::new(true, true);

        let params = CreateParams {
            title: Some("Orphan".to_string()),
            assign: Some("nobody".to_string()),
            ..CreateParams::default()
        };
        let result = handle_new_command(params, &mut ctx, &output);

        assert!(matches!(result, Err(TicketError::UserNotFound { .. })));
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn test_blank_title_is_rejected_by_store() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        let output = OutputFormatter::new(true, true);

        let params = CreateParams {
            title: Some("   ".to_string()),
            ..CreateParams::default()
        };
        let result = handle_new_command(params, &mut ctx, &output);

        assert!(matches!(result, Err(TicketError::MissingTitle)));
    }
}
