//! Core module containing the fundamental traits and types of the service

pub mod clock;
pub mod entity;
pub mod error;
pub mod service;
pub mod store;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{WorkforceError, WorkforceResult};
pub use service::{AssignmentService, DataService};
pub use store::{DepartmentStore, EmployeeStore, ProjectStore};
