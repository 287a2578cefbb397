//! Shared fixtures for the integration suites.
//!
//! Every suite runs against the in-memory store with a pinned clock so that
//! hire-date and project-activity rules are deterministic.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use workforce::prelude::*;

/// The date every fixture treats as "today"
pub fn today() -> NaiveDate {
    date(2024, 6, 15)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Parse a decimal literal such as `"50000.00"`
pub fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

/// Services over a fresh in-memory store
pub fn services() -> Services {
    services_on(today())
}

pub fn services_on(day: NaiveDate) -> Services {
    Services::new(
        Stores::from_backend(InMemoryStore::new()),
        Arc::new(FixedClock(day)),
    )
}

/// A REST server over a fresh in-memory store
pub fn server() -> TestServer {
    let app = ServerBuilder::new()
        .with_store(InMemoryStore::new())
        .with_clock(FixedClock(today()))
        .build()
        .unwrap();
    TestServer::new(app)
}

pub fn employee_draft(email: &str, salary: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: "Juan".to_string(),
        last_name: "Perez".to_string(),
        email: email.to_string(),
        hire_date: Some(date(2023, 6, 15)),
        salary: Some(dec(salary)),
        department_id: None,
    }
}

pub fn department_draft(name: &str) -> DepartmentDraft {
    DepartmentDraft {
        name: name.to_string(),
        description: None,
    }
}

pub fn project_draft(
    name: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> ProjectDraft {
    ProjectDraft {
        name: name.to_string(),
        description: None,
        start_date,
        end_date,
    }
}

/// JSON body for `POST /api/employees`
pub fn employee_json(email: &str, salary: &str) -> Value {
    json!({
        "first_name": "Juan",
        "last_name": "Perez",
        "email": email,
        "hire_date": "2023-06-15",
        "salary": salary
    })
}

/// Pull the `id` out of a created entity
pub fn id_of(body: &Value) -> String {
    body["id"].as_str().unwrap().to_string()
}
