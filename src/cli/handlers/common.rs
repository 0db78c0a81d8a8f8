use crate::config::Config;
use crate::core::{Priority, Status, Ticket};
use crate::error::{Result, TicketError};
use crate::storage::JsonTicketStore;
use crate::users::UserDirectory;
use std::path::Path;
use tracing::debug;

/// Common context for all handler operations
///
/// Owns the ticket store and the user directory for the lifetime of one
/// command.
pub struct HandlerContext {
    pub store: JsonTicketStore,
    pub users: UserDirectory,
}

impl HandlerContext {
    /// Create a new handler context
    ///
    /// `store_path` and `acting_user` override the configured ticket file and
    /// default user. The acting user must exist in the directory.
    pub fn new(config: &Config, store_path: Option<&Path>, acting_user: Option<&str>) -> Result<Self> {
        let path = store_path.unwrap_or(config.storage.path.as_path());
        debug!(path = %path.display(), "Opening ticket store");
        let store = JsonTicketStore::open(path);

        let mut users = UserDirectory::new();
        let username = acting_user.unwrap_or(config.users.default_user.as_str());
        let user = users
            .find_user_by_username(username)
            .cloned()
            .ok_or_else(|| TicketError::UserNotFound {
                username: username.to_string(),
            })?;
        users.set_current_user(user);

        Ok(Self { store, users })
    }

    /// Load a ticket by ID, failing when it does not exist
    pub fn load_ticket(&self, id: &str) -> Result<Ticket> {
        self.store
            .find_ticket(id)
            .ok_or_else(|| TicketError::TicketNotFound { id: id.to_string() })
    }

    /// Checks that `username` names a known user
    pub fn resolve_username(&self, username: &str) -> Result<String> {
        self.users
            .find_user_by_username(username)
            .map(|user| user.username.clone())
            .ok_or_else(|| TicketError::UserNotFound {
                username: username.to_string(),
            })
    }
}

/// Parse an optional status argument
pub fn parse_status(value: Option<&str>) -> Result<Option<Status>> {
    value.map(str::parse::<Status>).transpose()
}

/// Parse an optional priority argument
pub fn parse_priority(value: Option<&str>) -> Result<Option<Priority>> {
    value.map(str::parse::<Priority>).transpose()
}
