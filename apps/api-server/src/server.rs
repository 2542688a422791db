//! Server lifecycle - database pool and listening socket owned together.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::rt::task::JoinHandle;
use actix_web::{App, HttpServer, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use blog_core::RepoError;
use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabasePool, PostgresBlogPostRepository};
use migration::{Migrator, MigratorTrait};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Failures while starting or stopping the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Database unavailable: {0}")]
    Database(#[from] RepoError),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}

/// A running blog API: the database pool plus the listening HTTP server.
///
/// Created by [`BlogServer::start`], released by [`BlogServer::stop`].
pub struct BlogServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    database: Option<DatabasePool>,
}

impl BlogServer {
    /// Connect to the database, apply migrations and start listening.
    ///
    /// Nothing is left running on failure: if migrations or binding fail the
    /// pool is closed before the error is returned.
    pub async fn start(config: &AppConfig) -> Result<Self, ServerError> {
        let pool = DatabasePool::init(&config.database).await?;

        if let Err(e) = Migrator::up(pool.conn(), None).await {
            release(pool).await;
            return Err(ServerError::Migration(e.to_string()));
        }
        tracing::info!("Database migrations applied");

        let repo = Arc::new(PostgresBlogPostRepository::new(pool.conn().clone()));
        Self::launch(AppState::new(repo), &config.host, config.port, Some(pool)).await
    }

    /// Start listening with a caller-provided repository and no database pool.
    pub async fn start_with_repository(
        posts: Arc<dyn BlogPostRepository>,
        host: &str,
        port: u16,
    ) -> Result<Self, ServerError> {
        Self::launch(AppState::new(posts), host, port, None).await
    }

    async fn launch(
        state: AppState,
        host: &str,
        port: u16,
        database: Option<DatabasePool>,
    ) -> Result<Self, ServerError> {
        let bound = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        })
        .bind((host, port));

        let server = match bound {
            Ok(server) => server,
            Err(source) => {
                if let Some(pool) = database {
                    release(pool).await;
                }
                return Err(ServerError::Bind {
                    addr: format!("{}:{}", host, port),
                    source,
                });
            }
        };

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no address bound"))?;

        let server = server.run();
        let handle = server.handle();
        let task = actix_web::rt::spawn(server);

        tracing::info!("Blog API listening on {}", addr);

        Ok(Self {
            addr,
            handle,
            task,
            database,
        })
    }

    /// Address the listener is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Close the database pool, then stop the listener gracefully.
    pub async fn stop(self) -> Result<(), ServerError> {
        if let Some(pool) = self.database {
            pool.close().await?;
        }

        tracing::info!("Closing server");
        self.handle.stop(true).await;
        join(self.task).await
    }

    /// Serve until the process receives a shutdown signal, then release the pool.
    pub async fn run_until_stopped(self) -> Result<(), ServerError> {
        let served = join(self.task).await;

        if let Some(pool) = self.database {
            pool.close().await?;
        }
        served
    }
}

async fn join(task: JoinHandle<io::Result<()>>) -> Result<(), ServerError> {
    task.await.map_err(io::Error::other)??;
    Ok(())
}

async fn release(pool: DatabasePool) {
    if let Err(e) = pool.close().await {
        tracing::warn!("Failed to close database pool: {}", e);
    }
}
