//! Shared bb8 pool of `diesel-async` PostgreSQL connections.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};

/// How long a repository call waits for a free connection.
pub const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Failure to build the pool or to lease a connection from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("no database connection available: {0}")]
    Checkout(String),
    #[error("could not build database pool: {0}")]
    Build(String),
}

/// Target database and size of a [`DbPool`].
///
/// ```
/// use hello_backend::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://localhost/hello").with_max_connections(4);
/// assert_eq!(config.max_connections(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    database_url: String,
    max_connections: u32,
}

impl PoolConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    #[must_use]
    pub fn with_max_connections(self, max_connections: u32) -> Self {
        Self {
            max_connections,
            ..self
        }
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }
}

/// Cloneable handle to the person store's connection pool.
#[derive(Clone)]
pub struct DbPool(Pool<AsyncPgConnection>);

impl DbPool {
    /// Build the pool described by `config`.
    ///
    /// # Errors
    ///
    /// [`PoolError::Build`] when bb8 rejects the configuration.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        Pool::builder()
            .max_size(config.max_connections)
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build(manager)
            .await
            .map(Self)
            .map_err(|err| PoolError::Build(err.to_string()))
    }

    /// Lease a connection, waiting at most [`CHECKOUT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// [`PoolError::Checkout`] when no connection becomes available in time or
    /// a new one cannot be opened.
    pub async fn connection(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.0
            .get()
            .await
            .map_err(|err| PoolError::Checkout(err.to_string()))
    }
}
