//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, one handle implementing every store trait over
//! a shared `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! workforce = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Tables are created by the migrations under `migrations/`, applied with
//! [`PostgresStore::migrate`]. Uniqueness, the department reference and the
//! membership cascade are table constraints; their violations are mapped back
//! to the same domain errors the in-memory backend raises.

use crate::core::entity::Entity;
use crate::core::error::{EntityError, StorageError, WorkforceError, WorkforceResult};
use crate::core::service::{AssignmentService, DataService};
use crate::core::store::{DepartmentStore, EmployeeStore, ProjectStore};
use crate::entities::{Department, Employee, Project};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

const BACKEND: &str = "PostgreSQL";

/// SQLSTATE `numeric_value_out_of_range`
const NUMERIC_OVERFLOW: &str = "22003";

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email, hire_date, salary, department_id, created_at, updated_at";
const DEPARTMENT_COLUMNS: &str = "id, name, description, created_at, updated_at";
const PROJECT_COLUMNS: &str = "id, name, description, start_date, end_date, created_at, updated_at";

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn query_error(err: sqlx::Error) -> WorkforceError {
    StorageError::QueryError {
        backend: BACKEND.to_string(),
        message: err.to_string(),
    }
    .into()
}

fn unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

/// `CHECK` constraint failure or a value too large for its numeric column
fn out_of_range(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            matches!(db.kind(), sqlx::error::ErrorKind::CheckViolation)
                || db.code().as_deref() == Some(NUMERIC_OVERFLOW)
        }
        _ => false,
    }
}

fn employee_write_error(err: sqlx::Error, employee: &Employee) -> WorkforceError {
    if unique_violation(&err) {
        return EntityError::DuplicateEmail {
            email: employee.email.clone(),
        }
        .into();
    }
    if out_of_range(&err) {
        tracing::warn!(employee_id = %employee.id, salary = %employee.salary, "salary rejected by the database");
        return WorkforceError::invalid_argument(format!(
            "salary: {} is out of range",
            employee.salary
        ));
    }
    match employee.department_id {
        Some(department_id) if foreign_key_violation(&err) => {
            WorkforceError::not_found(Department::resource_name_singular(), department_id)
        }
        _ => query_error(err),
    }
}

fn name_write_error<T: Entity>(err: sqlx::Error, name: &str) -> WorkforceError {
    if unique_violation(&err) {
        return EntityError::DuplicateName {
            entity_type: T::resource_name_singular().to_string(),
            name: name.to_string(),
        }
        .into();
    }
    query_error(err)
}

fn count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Store backed by PostgreSQL.
///
/// # Example
///
/// ```rust,ignore
/// use workforce::storage::PostgresStore;
///
/// let store = PostgresStore::connect("postgres://localhost/workforce", 5).await?;
/// store.migrate().await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new `PostgresStore` with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> WorkforceResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StorageError::ConnectionError {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(pool))
    }

    /// Apply pending migrations (idempotent).
    pub async fn migrate(&self) -> WorkforceResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StorageError::ConnectionError {
                backend: BACKEND.to_string(),
                message: format!("migration failed: {}", e),
            })?;
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[async_trait]
impl DataService<Employee> for PostgresStore {
    async fn create(&self, employee: Employee) -> WorkforceResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "INSERT INTO employees ({EMPLOYEE_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(employee.department_id)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| employee_write_error(e, &employee))
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn list(&self) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn update(&self, id: &Uuid, employee: Employee) -> WorkforceResult<Employee> {
        sqlx::query_as::<_, Employee>(&format!(
            "UPDATE employees SET first_name = $2, last_name = $3, email = $4, hire_date = $5, \
             salary = $6, department_id = $7, updated_at = $8 \
             WHERE id = $1 RETURNING {EMPLOYEE_COLUMNS}"
        ))
        .bind(id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.hire_date)
        .bind(employee.salary)
        .bind(employee.department_id)
        .bind(employee.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| employee_write_error(e, &employee))?
        .ok_or_else(|| WorkforceError::not_found(Employee::resource_name_singular(), *id))
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for PostgresStore {
    async fn find_by_email(&self, email: &str) -> WorkforceResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn exists_by_email(&self, email: &str) -> WorkforceResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM employees WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)
    }

    async fn find_by_department(&self, department_id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE department_id = $1 ORDER BY created_at, id"
        ))
        .bind(department_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_by_department_name(&self, name: &str) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT e.id, e.first_name, e.last_name, e.email, e.hire_date, e.salary, \
             e.department_id, e.created_at, e.updated_at \
             FROM employees e JOIN departments d ON d.id = e.department_id \
             WHERE d.name = $1 ORDER BY e.created_at, e.id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_by_salary_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees \
             WHERE salary BETWEEN $1 AND $2 ORDER BY created_at, id"
        ))
        .bind(min)
        .bind(max)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_hired_after(&self, date: NaiveDate) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE hire_date > $1 ORDER BY created_at, id"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees \
             WHERE strpos(lower(first_name), lower($1)) > 0 \
                OR strpos(lower(last_name), lower($1)) > 0 \
             ORDER BY created_at, id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_without_department(&self) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE department_id IS NULL ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn count_by_department(&self, department_id: &Uuid) -> WorkforceResult<u64> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees WHERE department_id = $1")
                .bind(department_id)
                .fetch_one(&self.pool)
                .await
                .map_err(query_error)?;
        Ok(count(total))
    }

    async fn average_salary_by_department(
        &self,
        department_id: &Uuid,
    ) -> WorkforceResult<Option<Decimal>> {
        sqlx::query_scalar::<_, Option<Decimal>>(
            "SELECT AVG(salary) FROM employees WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_error)
    }
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[async_trait]
impl DataService<Department> for PostgresStore {
    async fn create(&self, department: Department) -> WorkforceResult<Department> {
        sqlx::query_as::<_, Department>(&format!(
            "INSERT INTO departments ({DEPARTMENT_COLUMNS}) VALUES ($1, $2, $3, $4, $5) \
             RETURNING {DEPARTMENT_COLUMNS}"
        ))
        .bind(department.id)
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.created_at)
        .bind(department.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| name_write_error::<Department>(e, &department.name))
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Department>> {
        sqlx::query_as::<_, Department>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn list(&self) -> WorkforceResult<Vec<Department>> {
        sqlx::query_as::<_, Department>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn update(&self, id: &Uuid, department: Department) -> WorkforceResult<Department> {
        sqlx::query_as::<_, Department>(&format!(
            "UPDATE departments SET name = $2, description = $3, updated_at = $4 \
             WHERE id = $1 RETURNING {DEPARTMENT_COLUMNS}"
        ))
        .bind(id)
        .bind(&department.name)
        .bind(&department.description)
        .bind(department.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| name_write_error::<Department>(e, &department.name))?
        .ok_or_else(|| WorkforceError::not_found(Department::resource_name_singular(), *id))
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if foreign_key_violation(&e) {
                    WorkforceError::invalid_state(
                        "Cannot delete a department that has employees assigned",
                    )
                } else {
                    query_error(e)
                }
            })?;
        Ok(())
    }
}

#[async_trait]
impl DepartmentStore for PostgresStore {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Department>> {
        sqlx::query_as::<_, Department>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM departments WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)
    }

    async fn find_with_salary_above(&self, amount: Decimal) -> WorkforceResult<Vec<Department>> {
        sqlx::query_as::<_, Department>(&format!(
            "SELECT {DEPARTMENT_COLUMNS} FROM departments d \
             WHERE EXISTS (SELECT 1 FROM employees e WHERE e.department_id = d.id AND e.salary > $1) \
             ORDER BY created_at, id"
        ))
        .bind(amount)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[async_trait]
impl DataService<Project> for PostgresStore {
    async fn create(&self, project: Project) -> WorkforceResult<Project> {
        sqlx::query_as::<_, Project>(&format!(
            "INSERT INTO projects ({PROJECT_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| name_write_error::<Project>(e, &project.name))
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn list(&self) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn update(&self, id: &Uuid, project: Project) -> WorkforceResult<Project> {
        sqlx::query_as::<_, Project>(&format!(
            "UPDATE projects SET name = $2, description = $3, start_date = $4, end_date = $5, \
             updated_at = $6 WHERE id = $1 RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(project.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| name_write_error::<Project>(e, &project.name))?
        .ok_or_else(|| WorkforceError::not_found(Project::resource_name_singular(), *id))
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for PostgresStore {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM projects WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)
    }

    async fn find_active_on(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE end_date IS NULL OR end_date > $1 ORDER BY created_at, id"
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_ended_before(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE end_date < $1 ORDER BY created_at, id"
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_started_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE start_date BETWEEN $1 AND $2 ORDER BY created_at, id"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE strpos(lower(name), lower($1)) > 0 ORDER BY created_at, id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_without_employees(&self) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p \
             WHERE NOT EXISTS (SELECT 1 FROM employee_projects ep WHERE ep.project_id = p.id) \
             ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn find_with_more_employees_than(&self, count: u64) -> WorkforceResult<Vec<Project>> {
        let threshold = i64::try_from(count).unwrap_or(i64::MAX);
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects p \
             WHERE (SELECT COUNT(*) FROM employee_projects ep WHERE ep.project_id = p.id) > $1 \
             ORDER BY created_at, id"
        ))
        .bind(threshold)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }
}

// ---------------------------------------------------------------------------
// Assignments
// ---------------------------------------------------------------------------

#[async_trait]
impl AssignmentService for PostgresStore {
    async fn assign(&self, employee_id: &Uuid, project_id: &Uuid) -> WorkforceResult<()> {
        self.assign_many(project_id, std::slice::from_ref(employee_id))
            .await
    }

    async fn assign_many(&self, project_id: &Uuid, employee_ids: &[Uuid]) -> WorkforceResult<()> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let project_exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM projects WHERE id = $1)")
                .bind(project_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(query_error)?;
        if !project_exists {
            return Err(WorkforceError::not_found(
                Project::resource_name_singular(),
                *project_id,
            ));
        }

        let found: Vec<Uuid> =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM employees WHERE id = ANY($1)")
                .bind(employee_ids)
                .fetch_all(&mut *tx)
                .await
                .map_err(query_error)?;
        if let Some(missing) = employee_ids.iter().find(|id| !found.contains(*id)) {
            return Err(WorkforceError::not_found(
                Employee::resource_name_singular(),
                *missing,
            ));
        }

        let assigned_at = Utc::now();
        for employee_id in employee_ids {
            sqlx::query(
                "INSERT INTO employee_projects (employee_id, project_id, assigned_at) \
                 VALUES ($1, $2, $3) ON CONFLICT (employee_id, project_id) DO NOTHING",
            )
            .bind(employee_id)
            .bind(project_id)
            .bind(assigned_at)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;
        }

        tx.commit().await.map_err(query_error)
    }

    async fn unassign(&self, employee_id: &Uuid, project_id: &Uuid) -> WorkforceResult<()> {
        sqlx::query("DELETE FROM employee_projects WHERE employee_id = $1 AND project_id = $2")
            .bind(employee_id)
            .bind(project_id)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(())
    }

    async fn projects_of(&self, employee_id: &Uuid) -> WorkforceResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT p.id, p.name, p.description, p.start_date, p.end_date, p.created_at, p.updated_at \
             FROM projects p JOIN employee_projects ep ON ep.project_id = p.id \
             WHERE ep.employee_id = $1 ORDER BY p.created_at, p.id",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn employees_of(&self, project_id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            "SELECT e.id, e.first_name, e.last_name, e.email, e.hire_date, e.salary, \
             e.department_id, e.created_at, e.updated_at \
             FROM employees e JOIN employee_projects ep ON ep.employee_id = e.id \
             WHERE ep.project_id = $1 ORDER BY e.created_at, e.id",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)
    }

    async fn count_for_project(&self, project_id: &Uuid) -> WorkforceResult<u64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM employee_projects WHERE project_id = $1",
        )
        .bind(project_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_error)?;
        Ok(count(total))
    }
}
