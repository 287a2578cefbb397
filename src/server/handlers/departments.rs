//! `/api/departments` handlers

use super::AmountParam;
use crate::core::error::WorkforceResult;
use crate::core::validation::Validated;
use crate::entities::{Department, DepartmentDraft, Employee};
use crate::server::extract::{ApiPath, ApiQuery};
use crate::server::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use rust_decimal::Decimal;
use uuid::Uuid;

pub async fn list(State(state): State<AppState>) -> WorkforceResult<Json<Vec<Department>>> {
    Ok(Json(state.departments.list().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Validated(draft): Validated<DepartmentDraft>,
) -> WorkforceResult<(StatusCode, Json<Department>)> {
    let department = state.departments.create(draft).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Department>> {
    Ok(Json(state.departments.fetch_by_id(&id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    Validated(draft): Validated<DepartmentDraft>,
) -> WorkforceResult<Json<Department>> {
    Ok(Json(state.departments.update(&id, draft).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<StatusCode> {
    state.departments.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn by_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> WorkforceResult<Json<Department>> {
    Ok(Json(state.departments.find_by_name(&name).await?))
}

pub async fn salary_above(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AmountParam>,
) -> WorkforceResult<Json<Vec<Department>>> {
    Ok(Json(state.departments.with_salary_above(query.amount).await?))
}

pub async fn employees(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Vec<Employee>>> {
    Ok(Json(state.departments.employees_of(&id).await?))
}

pub async fn add_employee(
    State(state): State<AppState>,
    ApiPath((id, employee_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.departments.add_employee(&id, &employee_id).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_employee(
    State(state): State<AppState>,
    ApiPath((id, employee_id)): ApiPath<(Uuid, Uuid)>,
) -> WorkforceResult<StatusCode> {
    state.departments.remove_employee(&id, &employee_id).await?;
    Ok(StatusCode::OK)
}

pub async fn average_salary(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<Decimal>> {
    Ok(Json(state.departments.average_salary(&id).await?))
}

pub async fn employee_count(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<u64>> {
    Ok(Json(state.departments.count_employees(&id).await?))
}

pub async fn name_exists(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> WorkforceResult<Json<bool>> {
    Ok(Json(state.departments.name_exists(&name).await?))
}

pub async fn can_delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> WorkforceResult<Json<bool>> {
    Ok(Json(state.departments.can_delete(&id).await?))
}
