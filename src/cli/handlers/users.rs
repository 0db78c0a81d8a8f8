use super::common::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::error::Result;
use colored::Colorize;

/// Handle the users command
pub fn handle_users_command(ctx: &HandlerContext, output: &OutputFormatter) -> Result<()> {
    let users = ctx.users.all_users();
    let current = ctx.users.current_user();

    if output.is_json() {
        return output.print_json(&serde_json::json!({
            "users": users,
            "current": current.username,
        }));
    }

    for user in &users {
        let marker = if user.username == current.username {
            "*"
        } else {
            " "
        };
        output.info(&format!("{marker} {:<12} {}", user.username, user.role.to_string().dimmed()));
    }

    Ok(())
}

/// Handle the whoami command
pub fn handle_whoami_command(ctx: &HandlerContext, output: &OutputFormatter) -> Result<()> {
    let current = ctx.users.current_user();

    if output.is_json() {
        return output.print_json(current);
    }
    output.info(&format!("{} ({})", current.username, current.role));

    Ok(())
}
