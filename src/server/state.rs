//! Application state shared across handlers

use crate::services::{DepartmentService, EmployeeService, ProjectService, Services};

/// Cloned into every request; all fields are cheap handles
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
    pub departments: DepartmentService,
    pub projects: ProjectService,
}

impl From<Services> for AppState {
    fn from(services: Services) -> Self {
        Self {
            employees: services.employees,
            departments: services.departments,
            projects: services.projects,
        }
    }
}
