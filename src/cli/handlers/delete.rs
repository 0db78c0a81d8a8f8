use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use crate::interactive::InteractiveMode;

/// Handle the delete command
///
/// Asks for confirmation unless `force` is set.
pub fn handle_delete_command(
    id: &str,
    force: bool,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let ticket = ctx.load_ticket(id)?;

    if !force {
        let prompt = format!("Delete ticket #{} '{}'?", ticket.id_str(), ticket.title);
        if !InteractiveMode::new().confirm(&prompt)? {
            output.warning("Cancelled");
            return Ok(());
        }
    }

    ctx.store.delete_ticket(&ticket)?;

    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "status": "success",
            "deleted": ticket.id,
        }));
    }
    output.success(&format!("Deleted ticket #{}", ticket.id_str()));

    Ok(())
}
