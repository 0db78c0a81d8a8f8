//! Command-line interface
//!
//! Argument definitions live here; each command's behaviour is in
//! [`handlers`].

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track support tickets stored in a JSON file
#[derive(Parser, Debug)]
#[command(name = "ticket-tracking", version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this file as well
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Ticket file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Act as this user (comments are attributed to them)
    #[arg(long = "as", global = true, value_name = "USERNAME")]
    pub acting_user: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tickets, optionally searching and filtering
    List {
        /// Text to look for in title, id, status or assignee
        #[arg(short, long)]
        query: Option<String>,

        /// Only tickets with this status
        #[arg(short, long)]
        status: Option<String>,

        /// Only tickets with this priority
        #[arg(short, long)]
        priority: Option<String>,

        /// Sort by id, created, updated, priority, status or title
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the order
        #[arg(short, long)]
        reverse: bool,

        /// Show at most this many tickets
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a ticket with its comments
    Show {
        /// Ticket ID
        id: String,
    },

    /// Create a ticket (prompts for details when no title is given)
    New {
        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        /// low, medium, high or critical (default: low)
        #[arg(short, long)]
        priority: Option<String>,

        /// Username to assign the ticket to
        #[arg(short, long)]
        assign: Option<String>,
    },

    /// Change a ticket
    Edit {
        /// Ticket ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        status: Option<String>,

        #[arg(short, long)]
        priority: Option<String>,

        /// Username to assign the ticket to
        #[arg(short, long, conflicts_with = "unassign")]
        assign: Option<String>,

        /// Remove the current assignee
        #[arg(long)]
        unassign: bool,

        /// Edit the fields with prompts
        #[arg(short, long)]
        interactive: bool,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Add a comment to a ticket as the acting user
    Comment {
        /// Ticket ID
        id: String,

        /// Comment text
        content: String,
    },

    /// List known users
    Users,

    /// Show the acting user
    Whoami,
}
