//! `/api/projects` handlers

use super::{CountParam, DateRange, SearchTerm};
use crate::core::error::{ValidationError, WorkforceError, WorkforceResult};
use crate::core::validation::Validated;
use crate::entities::{Employee, Project, ProjectDraft};
use crate::server::extract::{ApiPath, ApiQuery};
use crate::server::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

pub async fn list(State(state): State<AppState>) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Validated(draft): Validated<ProjectDraft>,
) -> WorkforceResult<(StatusCode, Json<Project>)> {
    let project = state.projects.create(draft).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Project>> {
    Ok(Json(state.projects.fetch_by_id(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    Validated(draft): Validated<ProjectDraft>,
) -> WorkforceResult<Json<Project>> {
    Ok(Json(state.projects.update(&id, draft).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<StatusCode> {
    state.projects.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn by_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> WorkforceResult<Json<Project>> {
    Ok(Json(state.projects.find_by_name(&name).await?))
}

pub async fn active(State(state): State<AppState>) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.active().await?))
}

pub async fn inactive(State(state): State<AppState>) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.inactive().await?))
}

pub async fn started_between(
    State(state): State<AppState>,
    ApiQuery(range): ApiQuery<DateRange>,
) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.started_between(range.from, range.to).await?))
}

pub async fn search(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchTerm>,
) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.search_by_name(&query.term).await?))
}

pub async fn without_employees(
    State(state): State<AppState>,
) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.without_employees().await?))
}

pub async fn with_more_employees(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CountParam>,
) -> WorkforceResult<Json<Vec<Project>>> {
    Ok(Json(state.projects.with_more_employees_than(query.count).await?))
}

pub async fn employees(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.projects.employees_of(&id).await?))
}

/// Body: JSON array of employee ids
pub async fn assign_employees(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    body: Result<Json<Vec<Uuid>>, JsonRejection>,
) -> WorkforceResult<StatusCode> {
    let Json(employee_ids) = body.map_err(|e| {
        WorkforceError::from(ValidationError::InvalidJson {
            message: e.body_text(),
        })
    })?;
    state.projects.assign_many(&id, &employee_ids).await?;
    Ok(StatusCode::OK)
}

pub async fn assign_employee(
    State(state): State<AppState>,
    ApiPath((id, employee_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.projects.assign_employee(&id, &employee_id).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_employee(
    State(state): State<AppState>,
    ApiPath((id, employee_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.projects.remove_employee(&id, &employee_id).await?;
    Ok(StatusCode::OK)
}

pub async fn employee_count(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<u64>> {
    Ok(Json(state.projects.count_employees(&id).await?))
}

pub async fn name_exists(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> WorkforceResult<Json<bool>> {
    Ok(Json(state.projects.name_exists(&name).await?))
}

pub async fn is_active(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<bool>> {
    Ok(Json(state.projects.is_active(&id).await?))
}

pub async fn finalize(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Project>> {
    Ok(Json(state.projects.finalize(&id).await?))
}
