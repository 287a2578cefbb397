//! REST API exposure
//!
//! Consumes the application state and produces an Axum `Router` with the
//! health checks, the `/api` resources and any custom routes.

use crate::core::entity::Entity;
use crate::entities::{Department, Employee, Project};
use crate::server::router::{department_routes, employee_routes, project_routes};
use crate::server::state::AppState;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - `/api/employees`, `/api/departments`, `/api/projects`
    /// - Custom routes
    pub fn build_router(state: AppState, custom_routes: Vec<Router>) -> Router {
        let api = Router::new()
            .nest(&Self::api_path::<Employee>(), employee_routes())
            .nest(&Self::api_path::<Department>(), department_routes())
            .nest(&Self::api_path::<Project>(), project_routes())
            .with_state(state);

        let mut app = Self::health_routes().merge(api);
        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app.layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
    }

    /// `/api/<resource>` for an entity type
    fn api_path<T: Entity>() -> String {
        format!("/api/{}", T::resource_name())
    }

    /// Build health check routes
    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    /// Health check endpoint handler
    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "workforce"
        }))
    }
}
