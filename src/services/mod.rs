//! Rule engine: the services owning every business invariant
//!
//! Services are cheap `Clone` handles over the store traits. They never talk
//! to a backend directly, so the same rules run over the in-memory store in
//! tests and over PostgreSQL in production.

pub mod department;
pub mod employee;
pub mod project;

pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use project::ProjectService;

use crate::core::clock::{Clock, SystemClock};
use crate::core::entity::Entity;
use crate::core::error::{WorkforceError, WorkforceResult};
use crate::core::service::AssignmentService;
use crate::core::store::{DepartmentStore, EmployeeStore, ProjectStore};
use std::sync::Arc;
use uuid::Uuid;

/// The store handles shared by all services
#[derive(Clone)]
pub struct Stores {
    pub employees: Arc<dyn EmployeeStore>,
    pub departments: Arc<dyn DepartmentStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub assignments: Arc<dyn AssignmentService>,
}

impl Stores {
    /// Use one backend for every store
    pub fn from_backend<S>(backend: S) -> Self
    where
        S: EmployeeStore + DepartmentStore + ProjectStore + AssignmentService + 'static,
    {
        let shared = Arc::new(backend);
        Self {
            employees: shared.clone(),
            departments: shared.clone(),
            projects: shared.clone(),
            assignments: shared,
        }
    }
}

/// All three services wired over the same stores and clock
#[derive(Clone)]
pub struct Services {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub projects: ProjectService,
}

impl Services {
    pub fn new(stores: Stores, clock: Arc<dyn Clock>) -> Self {
        Self {
            employees: EmployeeService::new(stores.clone(), clock.clone()),
            departments: DepartmentService::new(stores.clone()),
            projects: ProjectService::new(stores, clock),
        }
    }

    /// Services reading the system date
    pub fn with_system_clock(stores: Stores) -> Self {
        Self::new(stores, Arc::new(SystemClock))
    }
}

/// Unwrap a lookup result or fail with `NotFound`
pub(crate) fn found<T: Entity>(entity: Option<T>, id: &Uuid) -> WorkforceResult<T> {
    entity.ok_or_else(|| {
        tracing::debug!(entity = T::resource_name_singular(), id = %id, "lookup missed");
        WorkforceError::not_found(T::resource_name_singular(), *id)
    })
}
