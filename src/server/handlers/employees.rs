//! `/api/employees` handlers

use super::{DateParam, SalaryRange, SearchTerm};
use crate::core::error::WorkforceResult;
use crate::core::validation::Validated;
use crate::entities::{Employee, EmployeeDraft, Project};
use crate::server::extract::{ApiPath, ApiQuery};
use crate::server::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

pub async fn list(State(state): State<AppState>) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Validated(draft): Validated<EmployeeDraft>,
) -> WorkforceResult<(StatusCode, Json<Employee>)> {
    let employee = state.employees.create(draft).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Employee>> {
    Ok(Json(state.employees.fetch_by_id(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    Validated(draft): Validated<EmployeeDraft>,
) -> WorkforceResult<Json<Employee>> {
    Ok(Json(state.employees.update(&id, draft).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<StatusCode> {
    state.employees.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn by_email(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> WorkforceResult<Json<Employee>> {
    Ok(Json(state.employees.find_by_email(&email).await?))
}

pub async fn by_department_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.find_by_department_name(&name).await?))
}

pub async fn by_salary(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<SalaryRange>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.salary_range(range.min, range.max).await?))
}

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchTerm>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.search_by_name(&query.term).await?))
}

pub async fn hired_after(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DateParam>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.hired_after(query.date).await?))
}

pub async fn without_department(
    State(state): State<AppState>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.employees.without_department().await?))
}

pub async fn email_exists(
    State(state): State<AppState>,
    ApiPath(email): ApiPath<String>,
) -> WorkforceResult<Json<bool>> {
    Ok(Json(state.employees.email_exists(&email).await?))
}

pub async fn projects(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.employees.projects_of(&id).await?))
}

pub async fn assign_department(
    State(state): State<AppState>,
    ApiPath((id, department_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state
        .employees
        .assign_to_department(&id, &department_id)
        .await?;
    Ok(StatusCode::OK)
}

pub async fn assign_project(
    State(state): State<AppState>,
    ApiPath((id, project_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.employees.assign_to_project(&id, &project_id).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_project(
    State(state): State<AppState>,
    ApiPath((id, project_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.employees.remove_from_project(&id, &project_id).await?;
    Ok(StatusCode::OK)
}
