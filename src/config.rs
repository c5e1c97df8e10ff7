//! Server configuration.
//!
//! Every flag falls back to an environment variable, and `main` loads a
//! `.env` file before parsing.

use std::time::Duration;

use clap::Parser;

use crate::task::adapters::{
    DEFAULT_POOL_SIZE, PoolSettings,
    factory::{FactoryError, StorageBackend, StorageConfig},
};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Command-line and environment configuration for the server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "gestor-tareas", version, about = "Personal task manager JSON service")]
pub struct ServerArgs {
    /// Store URL: `postgres://…`, `sqlite://path`, a file path or `memory`.
    /// Defaults to a local `SQLite` file.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Address to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Maximum pooled store connections.
    #[arg(
        long,
        env = "DB_POOL_SIZE",
        default_value_t = DEFAULT_POOL_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Seconds to wait for a store connection before failing.
    #[arg(
        long,
        env = "DB_CONNECT_TIMEOUT_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_secs: u64,
}

impl ServerArgs {
    /// Resolves the store selection and pool settings.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedDatabaseUrl`] when the database URL
    /// names an unknown store.
    pub fn storage_config(&self) -> Result<StorageConfig, FactoryError> {
        Ok(StorageConfig {
            backend: StorageBackend::from_database_url(self.database_url.as_deref())?,
            pool: PoolSettings::new(
                self.pool_size,
                Duration::from_secs(self.connect_timeout_secs),
            ),
        })
    }

    /// Returns the `host:port` pair to bind.
    #[must_use]
    pub fn bind_address(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
