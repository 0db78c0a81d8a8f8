//! Layered configuration
//!
//! Settings are merged from, lowest priority first: built-in defaults, the
//! per-user config file, `./ticket-tracking.toml`, an explicit file given on
//! the command line, and `TICKET_TRACKING__SECTION__KEY` environment
//! variables.

use crate::error::Result;
use config::{Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the project-local config file
pub const LOCAL_CONFIG_FILE: &str = "ticket-tracking.toml";

const ENV_PREFIX: &str = "TICKET_TRACKING";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub users: UsersConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Ticket document, relative paths resolve against the working directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersConfig {
    /// Username acting when `--as` is not given
    #[serde(default = "default_user")]
    pub default_user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("tickets").join("tickets.json")
}

fn default_user() -> String {
    "support1".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            default_user: default_user(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads every layer; `explicit` must exist when given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(user_file) = user_config_file() {
            debug!(path = %user_file.display(), "Checking user config file");
            builder = builder.add_source(File::from(user_file).required(false));
        }
        builder = builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }
}

/// `<platform config dir>/ticket-tracking/config.toml`
fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ticket-tracking").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    const HOME_VARS: [&str; 2] = ["HOME", "XDG_CONFIG_HOME"];

    /// Runs `f` with the per-user config directory pointed at an empty temp dir
    fn with_empty_home<T>(f: impl FnOnce() -> T) -> T {
        let home = TempDir::new().unwrap();
        let saved: Vec<_> = HOME_VARS.iter().map(|var| std::env::var_os(var)).collect();

        // SAFETY: callers are #[serial], so no other test touches the environment
        unsafe {
            std::env::set_var("HOME", home.path());
            std::env::set_var("XDG_CONFIG_HOME", home.path().join(".config"));
        }
        let result = f();
        for (var, value) in HOME_VARS.iter().zip(saved) {
            match value {
                Some(value) => unsafe { std::env::set_var(var, value) },
                None => unsafe { std::env::remove_var(var) },
            }
        }
        result
    }

    #[test]
    #[serial]
    fn test_defaults() {
        let config = with_empty_home(|| Config::load(None)).unwrap();

        assert_eq!(config.storage.path, PathBuf::from("tickets/tickets.json"));
        assert_eq!(config.users.default_user, "support1");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    #[serial]
    fn test_explicit_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "[storage]\npath = \"/srv/helpdesk/tickets.json\"\n\n[users]\ndefault_user = \"admin\"\n",
        )
        .unwrap();

        let config = with_empty_home(|| Config::load(Some(path.as_path()))).unwrap();

        assert_eq!(
            config.storage.path,
            PathBuf::from("/srv/helpdesk/tickets.json")
        );
        assert_eq!(config.users.default_user, "admin");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    #[serial]
    fn test_user_config_file_is_read() {
        let config = with_empty_home(|| {
            let file = user_config_file().unwrap();
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(&file, "[users]\ndefault_user = \"support2\"\n").unwrap();
            Config::load(None)
        });

        assert_eq!(config.unwrap().users.default_user, "support2");
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(Some(temp_dir.path().join("absent.toml").as_path()));

        assert!(result.is_err_and(|e| e.is_config_error()));
    }

    #[test]
    #[serial]
    fn test_environment_overrides_defaults() {
        // SAFETY: serialized with every other test that reads the environment
        unsafe { std::env::set_var("TICKET_TRACKING__LOGGING__LEVEL", "debug") };
        let config = with_empty_home(|| Config::load(None));
        unsafe { std::env::remove_var("TICKET_TRACKING__LOGGING__LEVEL") };

        assert_eq!(config.unwrap().logging.level, "debug");
    }
}
