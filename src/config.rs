//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of days ahead the birthday scan looks.
pub const DEFAULT_REMINDER_WINDOW_DAYS: u32 = 7;

/// Upper bound accepted for the birthday window.
pub const MAX_REMINDER_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Days ahead included in the upcoming birthdays list (default: 7)
    pub reminder_window_days: u32,

    /// Prompt shown before each command
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACT_BOOK_REMINDER_WINDOW_DAYS`: Birthday window, 0-366 (default: 7)
    /// - `CONTACT_BOOK_PROMPT`: Interactive prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("CONTACT_BOOK_LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or(defaults.prompt);

        let reminder_window_days = Self::parse_env_u32(
            "CONTACT_BOOK_REMINDER_WINDOW_DAYS",
            defaults.reminder_window_days,
        )?;

        if reminder_window_days > MAX_REMINDER_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_REMINDER_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_REMINDER_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            reminder_window_days,
            prompt,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            reminder_window_days: DEFAULT_REMINDER_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
        }
    }
}
