//! Runtime configuration read from the process environment.
//!
//! `APP_USER` is captured once so the rest of the program never touches the
//! environment directly. `APP_LOG` is read by the binary's `env_logger`
//! setup rather than here.

use std::env;

use crate::gate::UserSource;

/// Environment variable holding the user name to check.
pub const USER_VAR: &str = "APP_USER";

/// Environment variable holding the `env_logger` filter for the binary.
pub const LOG_FILTER_VAR: &str = "APP_LOG";

/// Filter used when `APP_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Snapshot of the variables the program reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    user: Option<String>,
}

impl Config {
    /// Capture configuration from the current process environment.
    ///
    /// Values that are not valid Unicode are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var_os(name).and_then(|value| value.into_string().ok()))
    }

    /// Capture configuration using `lookup` to resolve variable names.
    ///
    /// # Examples
    ///
    /// ```
    /// use usergate::config::Config;
    ///
    /// let config = Config::from_lookup(|name| (name == "APP_USER").then(|| "admin".to_owned()));
    /// assert_eq!(config.user(), Some("admin"));
    /// ```
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            user: lookup(USER_VAR),
        }
    }

    /// The configured user, exactly as read.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

impl UserSource for Config {
    fn user(&self) -> Option<String> {
        self.user.clone()
    }
}
