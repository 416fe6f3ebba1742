//! Web server for Filedrop.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::{Config, WebConfig};
use crate::file::{FileRepository, FileService, FileStorage, UploadPolicy};
use crate::{Database, FiledropError, Result};

use super::handlers::AppState;
use super::router::create_app;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server around an existing application state.
    pub fn new(config: &Config, app_state: Arc<AppState>) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse::<SocketAddr>()
            .map_err(|e| FiledropError::Config(format!("invalid server address: {e}")))?;

        Ok(Self {
            addr,
            app_state,
            web_config: config.web.clone(),
        })
    }

    /// Connect to the database, prepare the storage directory and build the
    /// web server.
    ///
    /// The returned [`Database`] shares its pool with the server; the pool
    /// lives as long as the process.
    pub async fn bootstrap(config: &Config) -> Result<(Self, Database)> {
        let db = Database::connect(&config.database).await?;

        let storage = FileStorage::new(&config.storage.upload_dir)?;
        tracing::info!("File storage initialized at: {}", config.storage.upload_dir);

        let store = Arc::new(FileRepository::new(db.pool().clone()));
        let policy = UploadPolicy::from_config(&config.storage);
        let app_state = Arc::new(AppState::new(FileService::new(store, storage, policy)));

        let server = Self::new(config, app_state)?;
        Ok((server, db))
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = create_app(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = create_app(self.app_state, &self.web_config);

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
