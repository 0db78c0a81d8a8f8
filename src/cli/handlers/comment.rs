use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::Comment;
use crate::error::{Result, TicketError};

/// Handle the comment command
///
/// The comment is credited to the acting user and saved through a ticket
/// update, which also refreshes the ticket's `updated_at`.
pub fn handle_comment_command(
    id: &str,
    content: &str,
    ctx: &mut HandlerContext,
    output: &OutputFormatter,
) -> Result<()> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TicketError::InvalidInput(
            "Comment text cannot be empty".to_string(),
        ));
    }

    let mut ticket = ctx.load_ticket(id)?;
    let author = ctx.users.current_user().username.clone();
    ticket.add_comment(Comment::new(content, author));

    let updated = ctx.store.update_ticket(ticket)?;

    if output.is_json() {
        return output.print_json(&updated.comments.last());
    }
    if let Some(comment) = updated.comments.last() {
        output.success(&format!("Commented on ticket #{}", updated.id_str()));
        output.info(&format!("  {comment}"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::sample_tickets;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir, acting_user: &str) -> HandlerContext {
        let path = temp_dir.path().join("tickets.json");
        let mut ctx =
            HandlerContext::new(&Config::default(), Some(path.as_path()), Some(acting_user))
                .unwrap();
        for ticket in sample_tickets() {
            ctx.store.save_ticket(ticket).unwrap();
        }
        ctx
    }

    #[test]
    fn test_comment_is_credited_to_acting_user() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir, "support2");
        let output = OutputFormatter::new(true, true);

        handle_comment_command("1", "  Reset the password  ", &mut ctx, &output).unwrap();
        handle_comment_command("1", "Confirmed fixed", &mut ctx, &output).unwrap();

        let comments = ctx.load_ticket("1").unwrap().comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "Reset the password");
        assert_eq!(comments[0].created_by, "support2");
        assert_eq!(comments[1].id.as_deref(), Some("2"));
        assert_eq!(comments[1].ticket_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_empty_comment_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir, "admin");
        let output = OutputFormatter::new(true, true);

        let result = handle_comment_command("1", "   ", &mut ctx, &output);

        assert!(matches!(result, Err(TicketError::InvalidInput(_))));
        assert!(ctx.load_ticket("1").unwrap().comments.is_empty());
    }
}
