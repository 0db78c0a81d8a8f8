//! In-memory user directory
//!
//! The directory holds a fixed roster of accounts seeded at construction and
//! a pointer to the acting ("current") user, who is credited with comments.

use crate::core::{Role, User};
use tracing::debug;

/// Index of the account that acts by default (`support1`)
const DEFAULT_CURRENT_USER: usize = 1;

/// Fixed roster of accounts plus the acting user
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
    current_user: User,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    /// Creates the directory with its four seeded accounts
    #[must_use]
    pub fn new() -> Self {
        let users: Vec<User> = [
            ("admin", Role::Admin),
            ("support1", Role::SupportStaff),
            ("support2", Role::SupportStaff),
            ("customer1", Role::Customer),
        ]
        .into_iter()
        .enumerate()
        .map(|(index, (username, role))| User {
            id: Some((index + 1).to_string()),
            ..User::new(username, username, role)
        })
        .collect();

        let current_user = users[DEFAULT_CURRENT_USER].clone();

        Self {
            users,
            current_user,
        }
    }

    /// Copy of every account, in seeding order
    #[must_use]
    pub fn all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Usernames in seeding order, for selection prompts
    #[must_use]
    pub fn usernames(&self) -> Vec<String> {
        self.users.iter().map(|u| u.username.clone()).collect()
    }

    /// Exact, case-sensitive lookup
    #[must_use]
    pub fn find_user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    #[must_use]
    pub const fn current_user(&self) -> &User {
        &self.current_user
    }

    /// Replaces the acting user; membership in the roster is not checked
    pub fn set_current_user(&mut self, user: User) {
        debug!(username = %user.username, "Switching current user");
        self.current_user = user;
    }
}
