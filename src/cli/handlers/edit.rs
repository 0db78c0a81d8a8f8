use super::common::{HandlerContext, parse_priority, parse_status};
use crate::cli::output::OutputFormatter;
use crate::error::{Result, TicketError};
use crate::interactive::InteractiveMode;

/// Parameters for editing a ticket
#[derive(Debug, Default)]
pub struct EditParams {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assign: Option<String>,
    pub unassign: bool,
    pub interactive: bool,
}

impl EditParams {
    fn has_field_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.priority.is_some()
            || self.assign.is_some()
            || self.unassign
    }
}

/// Handle the edit command
///
/// Field arguments are applied first; `--interactive` then opens the form
/// pre-filled with the result.
pub fn handle_edit_command(
    params: EditParams,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    if !params.interactive && !params.has_field_changes() {
        return Err(TicketError::InvalidInput(
            "Nothing to change. Pass at least one field or --interactive".to_string(),
        ));
    }

    let mut ticket = ctx.load_ticket(&params.id)?;

    if let Some(title) = params.title {
        ticket.title = title.trim().to_string();
    }
    if let Some(description) = params.description {
        ticket.description = description.trim().to_string();
    }
    if let Some(status) = parse_status(params.status.as_deref())? {
        ticket.status = Some(status);
    }
    if let Some(priority) = parse_priority(params.priority.as_deref())? {
        ticket.priority = Some(priority);
    }
    if let Some(username) = params.assign {
        ticket.assigned_to = Some(ctx.resolve_username(&username)?);
    } else if params.unassign {
        ticket.assigned_to = None;
    }

    if params.interactive {
        InteractiveMode::new().edit_ticket(&mut ticket, &ctx.users.usernames())?;
    }

    let updated = ctx.store.update_ticket(ticket)?;

    if output.is_json() {
        return output.print_json(&updated);
    }
    output.success(&format!(
        "Updated ticket #{} '{}'",
        updated.id_str(),
        updated.title
    ));

    Ok(())
}
