//! ticket-tracking - Support ticket tracker
//!
//! This is the main entry point for the ticket-tracking CLI application.
//! It loads configuration, sets up logging and dispatches to the command
//! handlers.

use clap::Parser;
use std::process;
use ticket_tracking::cli::handlers::{
    CreateParams, EditParams, HandlerContext, ListParams, handle_comment_command,
    handle_delete_command, handle_edit_command, handle_list_command, handle_new_command,
    handle_show_command, handle_users_command, handle_whoami_command,
};
use ticket_tracking::cli::{Cli, Commands, OutputFormatter};
use ticket_tracking::config::Config;
use ticket_tracking::error::{Result, TicketError};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// Configuration is loaded before logging is set up, so the configured log
/// level can apply. `RUST_LOG` wins over both `--verbose` and the config.
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config.logging.level);

    let mut ctx = HandlerContext::new(&config, cli.store.as_deref(), cli.acting_user.as_deref())?;

    dispatch_command(cli.command, &mut ctx, formatter)
}

fn init_tracing(verbose: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { configured_level };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    // Keep a subscriber that is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn dispatch_command(
    command: Commands,
    ctx: &mut HandlerContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::List {
            query,
            status,
            priority,
            sort,
            reverse,
            limit,
        } => handle_list_command(
            &ListParams {
                query,
                status,
                priority,
                sort,
                reverse,
                limit,
            },
            ctx,
            formatter,
        ),
        Commands::Show { id } => handle_show_command(&id, ctx, formatter),
        Commands::New {
            title,
            description,
            priority,
            assign,
        } => handle_new_command(
            CreateParams {
                title,
                description,
                priority,
                assign,
            },
            ctx,
            formatter,
        ),
        Commands::Edit {
            id,
            title,
            description,
            status,
            priority,
            assign,
            unassign,
            interactive,
        } => handle_edit_command(
            EditParams {
                id,
                title,
                description,
                status,
                priority,
                assign,
                unassign,
                interactive,
            },
            ctx,
            formatter,
        ),
        Commands::Delete { id, force } => handle_delete_command(&id, force, ctx, formatter),
        Commands::Comment { id, content } => handle_comment_command(&id, &content, ctx, formatter),
        Commands::Users => handle_users_command(ctx, formatter),
        Commands::Whoami => handle_whoami_command(ctx, formatter),
    }
}

/// Handle errors with enhanced user feedback
fn handle_error(error: &TicketError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "validation": error.is_validation(),
            "not_found": error.is_not_found(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
