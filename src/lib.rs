//! # Workforce
//!
//! A REST service for employees, departments and projects.
//!
//! ## Layers
//!
//! - **Stores** ([`core::store`], [`core::service`]): persistence gateway
//!   traits, implemented by [`storage::InMemoryStore`] and, behind the
//!   `postgres` feature, `storage::PostgresStore`
//! - **Services** ([`services`]): the rule engine. Uniqueness of emails and
//!   names, department membership, project staffing and date rules
//! - **Server** ([`server`]): axum router under `/api`, errors rendered by
//!   [`core::error::WorkforceError`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use workforce::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        clock::{Clock, FixedClock, SystemClock},
        entity::Entity,
        error::{EntityError, RuleError, ValidationError, WorkforceError, WorkforceResult},
        service::{AssignmentService, DataService},
        store::{DepartmentStore, EmployeeStore, ProjectStore},
        validation::Validated,
    };

    // === Entities ===
    pub use crate::entities::{
        Assignment, Department, DepartmentDraft, Employee, EmployeeDraft, Project, ProjectDraft,
    };

    // === Services ===
    pub use crate::services::{
        DepartmentService, EmployeeService, ProjectService, Services, Stores,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{NaiveDate, Utc};
    pub use rust_decimal::Decimal;
    pub use uuid::Uuid;
}
