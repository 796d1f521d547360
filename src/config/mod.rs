//! Application configuration module
//!
//! Configuration is loaded once at startup from environment variables using
//! the `config` and `dotenvy` crates and then passed explicitly to whatever
//! needs it. Variables use the `BLOGTOO` prefix and `__` between nested keys.
//!
//! The notification credentials additionally honour their historical,
//! unprefixed names (`TWILIO_ACCOUNT_SID`, `TWILIO_AUTH_TOKEN`,
//! `TWILIO_PHONE_NUMBER`, `ADMIN_PHONE_NUMBER`, `COMMENT_WEBHOOK_URL`),
//! which take precedence over the prefixed form.
//!
//! # Example
//!
//! ```no_run
//! use blogtoo::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod content;
mod error;
mod notifications;
mod server;
mod storage;

pub use content::{ContentConfig, MAX_POSTS_PER_PAGE};
pub use error::{ConfigError, ValidationError};
pub use notifications::{NotificationsConfig, SmsSettings, MAX_NOTIFICATION_RETRIES};
pub use server::{Environment, ServerConfig};
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Post directory and listing settings
    #[serde(default)]
    pub content: ContentConfig,

    /// Comment store selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// New-comment notification channels
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `BLOGTOO__SECTION__KEY` variables
    /// 3. Overlays the unprefixed notification variables
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("BLOGTOO")
                .separator("__"),
        );

        for (key, var) in notifications::LEGACY_ENV_KEYS {
            builder = builder.set_override_option(key, std::env::var(var).ok())?;
        }

        let config = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.content.validate()?;
        self.storage.validate()?;
        self.notifications.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
