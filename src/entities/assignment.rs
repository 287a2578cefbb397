//! Membership record of the employee/project association set

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One `(employee, project)` pair; at most one record exists per pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Assignment {
    pub employee_id: Uuid,
    pub project_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(employee_id: Uuid, project_id: Uuid) -> Self {
        Self {
            employee_id,
            project_id,
            assigned_at: Utc::now(),
        }
    }

    /// Key identifying the pair in the association set
    pub fn key(&self) -> (Uuid, Uuid) {
        (self.employee_id, self.project_id)
    }
}
