//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::state::AppState;
use crate::core::clock::{Clock, SystemClock};
use crate::core::service::AssignmentService;
use crate::core::store::{DepartmentStore, EmployeeStore, ProjectStore};
use crate::services::{Services, Stores};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    stores: Option<Stores>,
    clock: Arc<dyn Clock>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder reading the system clock
    pub fn new() -> Self {
        Self {
            stores: None,
            clock: Arc::new(SystemClock),
            custom_routes: Vec::new(),
        }
    }

    /// Set the storage backend (required)
    pub fn with_store<S>(mut self, backend: S) -> Self
    where
        S: EmployeeStore + DepartmentStore + ProjectStore + AssignmentService + 'static,
    {
        self.stores = Some(Stores::from_backend(backend));
        self
    }

    /// Use separately built store handles
    pub fn with_stores(mut self, stores: Stores) -> Self {
        self.stores = Some(stores);
        self
    }

    /// Replace the clock used for date-relative rules
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Wire the services over the configured stores
    pub fn build_services(&mut self) -> Result<Services> {
        let stores = self
            .stores
            .take()
            .ok_or_else(|| anyhow::anyhow!("A store is required. Call .with_store()"))?;
        Ok(Services::new(stores, self.clock.clone()))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let services = self.build_services()?;
        let custom_routes = std::mem::take(&mut self.custom_routes);
        Ok(RestExposure::build_router(
            AppState::from(services),
            custom_routes,
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
