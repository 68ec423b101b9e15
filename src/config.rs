//! Configuration module for formrelay
//!
//! This module handles loading and validating configuration from environment
//! variables, providing strongly-typed configuration structures for the form
//! core and its UI timing parameters.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Main configuration structure for formrelay
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    /// Application configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub app: AppConfig,

    /// Form submission configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub form: FormConfig,

    /// Notification configuration
    #[serde(flatten)]
    #[envconfig(nested)]
    pub notifications: NotificationConfig,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct AppConfig {
    /// Log level
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// Environment (development, staging, production)
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,
}

impl AppConfig {
    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Form submission configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct FormConfig {
    /// Simulated send latency in milliseconds for the stub sender
    #[envconfig(from = "SUBMIT_DELAY_MS", default = "2000")]
    pub submit_delay_ms: u64,
}

impl FormConfig {
    /// Get the stub send latency as Duration
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

/// Notification configuration
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct NotificationConfig {
    /// Auto-dismiss delay for notifications in milliseconds
    #[envconfig(from = "DISMISS_DELAY_MS", default = "5000")]
    pub dismiss_delay_ms: u64,
}

impl NotificationConfig {
    /// Get the auto-dismiss delay as Duration
    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenv::dotenv().ok();

        // Parse configuration from environment
        Config::init_from_env().map_err(Error::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.notifications.dismiss_delay_ms == 0 {
            return Err(Error::config("Dismiss delay must be at least 1ms"));
        }

        if self.app.log_level.is_empty() {
            return Err(Error::config("Log level cannot be empty"));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!(
            environment = %self.app.environment,
            log_level = %self.app.log_level,
            "Application configuration"
        );

        tracing::info!(
            submit_delay_ms = %self.form.submit_delay_ms,
            dismiss_delay_ms = %self.notifications.dismiss_delay_ms,
            "Form configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                log_level: "info".to_string(),
                environment: "development".to_string(),
            },
            form: FormConfig {
                submit_delay_ms: 2000,
            },
            notifications: NotificationConfig {
                dismiss_delay_ms: 5000,
            },
        }
    }

    #[test]
    fn test_app_config_environment() {
        let config = test_config();
        assert!(config.app.is_development());
        assert!(!config.app.is_production());
    }

    #[test]
    fn test_delay_durations() {
        let config = test_config();
        assert_eq!(config.form.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.notifications.dismiss_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_validate_rejects_zero_dismiss_delay() {
        let mut config = test_config();
        config.notifications.dismiss_delay_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(test_config().validate().is_ok());
    }
}
