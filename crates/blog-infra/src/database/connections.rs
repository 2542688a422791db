#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use blog_core::RepoError;
#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Connection pool to the blog database.
///
/// Owned by the server for its whole lifetime: opened by [`DatabasePool::init`]
/// before the listener is bound and released by [`DatabasePool::close`].
#[cfg(feature = "postgres")]
pub struct DatabasePool {
    pub main: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, RepoError> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { main })
    }

    /// Underlying SeaORM connection.
    pub fn conn(&self) -> &DbConn {
        &self.main
    }

    /// Close every connection in the pool.
    pub async fn close(self) -> Result<(), RepoError> {
        tracing::info!("Closing database connection");
        self.main
            .close()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }
}
