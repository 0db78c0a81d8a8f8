//! List command handler

use super::common::{HandlerContext, parse_priority, parse_status};
use crate::cli::output::{OutputFormatter, priority_label, status_label, truncate};
use crate::core::{DISPLAY_TIME_FORMAT, Ticket};
use crate::error::Result;
use crate::filter::{SortBy, TicketFilter};

const TITLE_WIDTH: usize = 36;

/// Arguments of the list command, as typed
#[derive(Debug, Default)]
pub struct ListParams {
    pub query: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub sort: Option<String>,
    pub reverse: bool,
    pub limit: Option<usize>,
}

impl ListParams {
    /// Turn the typed arguments into a filter
    pub fn to_filter(&self) -> Result<TicketFilter> {
        Ok(TicketFilter {
            query: self.query.clone().unwrap_or_default(),
            status: parse_status(self.status.as_deref())?,
            priority: parse_priority(self.priority.as_deref())?,
            sort_by: self.sort.as_deref().map(str::parse::<SortBy>).transpose()?,
            reverse: self.reverse,
            limit: self.limit,
        })
    }
}

/// Handle the list command
pub fn handle_list_command(
    params: &ListParams,
    ctx: &HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let filter = params.to_filter()?;
    let tickets = filter.apply(&ctx.store.get_all_tickets());

    if output.is_json() {
        return output.print_json(&tickets);
    }

    if tickets.is_empty() {
        if ctx.store.is_empty() {
            output.info("No tickets yet. Create one with 'ticket-tracking new'.");
        } else {
            output.info("No tickets match the given filters.");
        }
        return Ok(());
    }

    output.info(&format!(
        "{:<5} {:<TITLE_WIDTH$} {:<12} {:<9} {:<10} {}",
        "ID", "TITLE", "STATUS", "PRIORITY", "ASSIGNEE", "CREATED"
    ));
    for ticket in &tickets {
        output.info(&row(ticket));
    }
    output.info(&format!(
        "\n{} of {} ticket(s)",
        tickets.len(),
        ctx.store.len()
    ));

    Ok(())
}

fn row(ticket: &Ticket) -> String {
    let created = ticket
        .created_at
        .map(|at| at.format(DISPLAY_TIME_FORMAT).to_string())
        .unwrap_or_default();

    format!(
        "{:<5} {:<TITLE_WIDTH$} {} {} {:<10} {}",
        ticket.id_str(),
        truncate(&ticket.title, TITLE_WIDTH),
        status_label(ticket.status, 12),
        priority_label(ticket.priority, 9),
        ticket.assigned_to.as_deref().unwrap_or("-"),
        created
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Priority, Status};

    #[test]
    fn test_params_to_filter() {
        let params = ListParams {
            query: Some("vpn".to_string()),
            status: Some("in-progress".to_string()),
            priority: Some("HIGH".to_string()),
            sort: Some("priority".to_string()),
            ..ListParams::default()
        };

        let filter = params.to_filter().unwrap();
        assert_eq!(filter.query, "vpn");
        assert_eq!(filter.status, Some(Status::InProgress));
        assert_eq!(filter.priority, Some(Priority::High));
        assert_eq!(filter.sort_by, Some(SortBy::Priority));
    }

    #[test]
    fn test_invalid_status_is_rejected() {
        let params = ListParams {
            status: Some("finished".to_string()),
            ..ListParams::default()
        };
        assert!(params.to_filter().is_err());
    }
}
