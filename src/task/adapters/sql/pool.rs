//! Connection pool settings and store setup errors.

use std::time::Duration;
use thiserror::Error;

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;
/// Default time to wait for a pooled connection.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection pool sizing and timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    max_size: u32,
    connection_timeout: Duration,
}

impl PoolSettings {
    /// Creates pool settings.
    ///
    /// Zero values are raised to one connection and one second respectively,
    /// since the pool rejects empty sizes and timeouts.
    #[must_use]
    pub fn new(max_size: u32, connection_timeout: Duration) -> Self {
        Self {
            max_size: max_size.max(1),
            connection_timeout: connection_timeout.max(Duration::from_secs(1)),
        }
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn max_size(self) -> u32 {
        self.max_size
    }

    /// Returns how long a checkout waits before failing.
    #[must_use]
    pub const fn connection_timeout(self) -> Duration {
        self.connection_timeout
    }
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_CONNECTION_TIMEOUT)
    }
}

/// Errors raised while opening or migrating a task store.
#[derive(Debug, Error)]
pub enum StoreSetupError {
    /// The connection pool could not be built or a connection checked out.
    #[error("failed to open task store: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    /// Applying the schema failed.
    #[error("failed to apply task store schema: {0}")]
    Migration(#[from] diesel::result::Error),
}
