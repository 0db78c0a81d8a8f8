//! Command handlers
//!
//! Each submodule implements one command on top of a shared
//! [`HandlerContext`].

mod comment;
mod common;
mod create;
mod delete;
mod edit;
mod list;
mod show;
mod users;

pub use comment::handle_comment_command;
pub use common::{HandlerContext, parse_priority, parse_status};
pub use create::{CreateParams, handle_new_command};
pub use delete::handle_delete_command;
pub use edit::{EditParams, handle_edit_command};
pub use list::{ListParams, handle_list_command};
pub use show::handle_show_command;
pub use users::{handle_users_command, handle_whoami_command};
