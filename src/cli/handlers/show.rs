use super::common::HandlerContext;
use crate::cli::output::{OutputFormatter, priority_label, status_label};
use crate::core::DISPLAY_TIME_FORMAT;
use crate::error::Result;
use chrono::NaiveDateTime;

/// Handle the show command
pub fn handle_show_command(id: &str, ctx: &HandlerContext, output: &OutputFormatter) -> Result<()> {
    let ticket = ctx.load_ticket(id)?;

    if output.is_json() {
        return output.print_json(&ticket);
    }

    let when = |at: Option<NaiveDateTime>| {
        at.map_or_else(|| "-".to_string(), |at| at.format(DISPLAY_TIME_FORMAT).to_string())
    };

    output.info(&format!("#{} {}", ticket.id_str(), ticket.title));
    output.info(&format!("Status:      {}", status_label(ticket.status, 0)));
    output.info(&format!("Priority:    {}", priority_label(ticket.priority, 0)));
    output.info(&format!(
        "Assigned to: {}",
        ticket.assigned_to.as_deref().unwrap_or("(unassigned)")
    ));
    output.info(&format!("Created:     {}", when(ticket.created_at)));
    output.info(&format!("Updated:     {}", when(ticket.updated_at)));

    if !ticket.description.is_empty() {
        output.info("");
        output.info(&ticket.description);
    }

    output.info("");
    if ticket.comments.is_empty() {
        output.info("No comments.");
    } else {
        output.info(&format!("Comments ({}):", ticket.comments.len()));
        for comment in &ticket.comments {
            output.info(&format!("  {comment}"));
        }
    }

    Ok(())
}
