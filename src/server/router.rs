//! Route tables for the three resources

use super::handlers::{departments, employees, projects};
use super::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Routes mounted under `/api/employees`
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(employees::list).post(employees::create))
        .route(
            "/{id}",
            get(employees::get)
                .put(employees::update)
                .delete(employees::delete),
        )
        .route("/email/{email}", get(employees::by_email))
        .route("/department/{name}", get(employees::by_department_name))
        .route("/salary", get(employees::by_salary))
        .route("/search", get(employees::search))
        .route("/hired-after", get(employees::hired_after))
        .route("/without-department", get(employees::without_department))
        .route("/exists/email/{email}", get(employees::email_exists))
        .route("/{id}/projects", get(employees::projects))
        .route(
            "/{id}/department/{department_id}",
            put(employees::assign_department),
        )
        .route(
            "/{id}/projects/{project_id}",
            put(employees::assign_project).delete(employees::remove_project),
        )
}

/// Routes mounted under `/api/departments`
pub fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(departments::list).post(departments::create))
        .route(
            "/{id}",
            get(departments::get)
                .put(departments::update)
                .delete(departments::delete),
        )
        .route("/name/{name}", get(departments::by_name))
        .route("/salary-above", get(departments::salary_above))
        .route("/exists/name/{name}", get(departments::name_exists))
        .route("/{id}/employees", get(departments::employees))
        .route(
            "/{id}/employees/{employee_id}",
            put(departments::add_employee).delete(departments::remove_employee),
        )
        .route("/{id}/average-salary", get(departments::average_salary))
        .route("/{id}/employee-count", get(departments::employee_count))
        .route("/{id}/can-delete", get(departments::can_delete))
}

/// Routes mounted under `/api/projects`
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/name/{name}", get(projects::by_name))
        .route("/active", get(projects::active))
        .route("/inactive", get(projects::inactive))
        .route("/started-between", get(projects::started_between))
        .route("/search", get(projects::search))
        .route("/without-employees", get(projects::without_employees))
        .route("/with-more-employees", get(projects::with_more_employees))
        .route("/exists/name/{name}", get(projects::name_exists))
        .route(
            "/{id}/employees",
            get(projects::employees).put(projects::assign_employees),
        )
        .route(
            "/{id}/employees/{employee_id}",
            put(projects::assign_employee).delete(projects::remove_employee),
        )
        .route("/{id}/employee-count", get(projects::employee_count))
        .route("/{id}/active", get(projects::is_active))
        .route("/{id}/finalize", put(projects::finalize))
}
