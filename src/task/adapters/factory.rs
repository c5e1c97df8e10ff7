//! Repository factory for runtime store selection.
//!
//! The store is chosen from a single database URL:
//!
//! - `postgres://…` or `postgresql://…`: `PostgreSQL`
//! - `sqlite:///path`, `sqlite://path` or a bare file path: `SQLite`
//! - `memory`: in-memory, lost on exit
//! - unset or empty: `SQLite` at [`DEFAULT_SQLITE_PATH`]

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use super::memory::InMemoryTaskRepository;
use super::postgres::{self, PostgresTaskRepository};
use super::sql::{PoolSettings, StoreSetupError};
use super::sqlite::{self, SqliteTaskRepository};
use crate::task::ports::TaskRepository;

/// Database file used when no URL is configured.
pub const DEFAULT_SQLITE_PATH: &str = "gestor_tareas.sqlite";

const SQLITE_SCHEMES: [&str; 2] = ["sqlite:///", "sqlite://"];
const POSTGRES_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];
const MEMORY_KEYWORDS: [&str; 3] = ["memory", "in_memory", "inmemory"];
const HOSTED_NEON_DOMAIN: &str = "neon.tech";

/// Which store backs the task repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage for tests and throwaway runs.
    InMemory,
    /// `SQLite` database file (or `:memory:`).
    Sqlite {
        /// Path handed to `SQLite`.
        path: String,
    },
    /// `PostgreSQL` server.
    Postgres {
        /// Connection URL.
        url: String,
    },
}

impl Default for StorageBackend {
    fn default() -> Self {
        Self::Sqlite {
            path: DEFAULT_SQLITE_PATH.to_owned(),
        }
    }
}

impl StorageBackend {
    /// Selects a backend from an optional database URL, falling back to the
    /// default `SQLite` file when the URL is absent or blank.
    ///
    /// # Errors
    ///
    /// See [`StorageBackend::from_str`].
    pub fn from_database_url(url: Option<&str>) -> Result<Self, FactoryError> {
        url.map_or_else(|| Ok(Self::default()), str::parse)
    }

    /// Short backend name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InMemory => "memory",
            Self::Sqlite { .. } => "sqlite",
            Self::Postgres { .. } => "postgres",
        }
    }
}

impl FromStr for StorageBackend {
    type Err = FactoryError;

    /// Parses a database URL.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnsupportedDatabaseUrl`] for URLs with a
    /// scheme other than `postgres`, `postgresql` or `sqlite`, and for
    /// `sqlite://` URLs without a path.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let url = value.trim();
        if url.is_empty() {
            return Ok(Self::default());
        }
        if MEMORY_KEYWORDS.iter().any(|keyword| url.eq_ignore_ascii_case(keyword)) {
            return Ok(Self::InMemory);
        }
        if POSTGRES_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
            return Ok(Self::Postgres {
                url: require_tls_for_hosted_neon(url),
            });
        }
        if let Some(path) = SQLITE_SCHEMES
            .iter()
            .find_map(|scheme| url.strip_prefix(*scheme))
        {
            if path.is_empty() {
                return Err(FactoryError::UnsupportedDatabaseUrl(url.to_owned()));
            }
            return Ok(Self::Sqlite {
                path: path.to_owned(),
            });
        }
        if url.contains("://") {
            return Err(FactoryError::UnsupportedDatabaseUrl(url.to_owned()));
        }
        Ok(Self::Sqlite {
            path: url.to_owned(),
        })
    }
}

/// Hosted Neon databases only accept TLS connections.
fn require_tls_for_hosted_neon(url: &str) -> String {
    if !url.contains(HOSTED_NEON_DOMAIN) || url.contains("sslmode") {
        return url.to_owned();
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}sslmode=require")
}

/// Configuration for the repository factory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Selected store.
    pub backend: StorageBackend,
    /// Pool sizing for SQL stores.
    pub pool: PoolSettings,
}

/// Errors raised while selecting or opening a store.
#[derive(Debug, Error)]
pub enum FactoryError {
    /// The database URL names a store this service cannot use.
    #[error("unsupported database URL: '{0}'; expected postgres://, postgresql://, sqlite://, a file path or 'memory'")]
    UnsupportedDatabaseUrl(String),

    /// Opening or migrating the store failed.
    #[error(transparent)]
    Setup(#[from] StoreSetupError),
}

/// Creates task repositories from a [`StorageConfig`].
#[derive(Debug, Clone)]
pub struct TaskRepositoryFactory {
    config: StorageConfig,
}

impl TaskRepositoryFactory {
    /// Creates a factory for the given configuration.
    #[must_use]
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Opens the configured store, applies its schema and returns the
    /// repository.
    ///
    /// Connecting blocks; call this from a blocking context.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::Setup`] when the store cannot be opened or its
    /// schema cannot be applied.
    pub fn create(&self) -> Result<Arc<dyn TaskRepository>, FactoryError> {
        let repository: Arc<dyn TaskRepository> = match &self.config.backend {
            StorageBackend::InMemory => Arc::new(InMemoryTaskRepository::new()),
            StorageBackend::Sqlite { path } => {
                let pool = sqlite::connect(path, self.config.pool)?;
                sqlite::migrate(&pool)?;
                Arc::new(SqliteTaskRepository::new(pool))
            }
            StorageBackend::Postgres { url } => {
                let pool = postgres::connect(url, self.config.pool)?;
                postgres::migrate(&pool)?;
                Arc::new(PostgresTaskRepository::new(pool))
            }
        };
        tracing::info!(backend = self.config.backend.name(), "task store ready");
        Ok(repository)
    }
}
