//! Per-entity store traits with the derived queries the rule engine needs
//!
//! Each store extends [`DataService`] for its entity. Queries that cross
//! entities (department name of an employee, employee counts of a project)
//! are answered by the store so a backend can resolve them with one join.

use crate::core::error::WorkforceResult;
use crate::core::service::DataService;
use crate::entities::{Department, Employee, Project};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

#[async_trait]
pub trait EmployeeStore: DataService<Employee> {
    async fn find_by_email(&self, email: &str) -> WorkforceResult<Option<Employee>>;

    async fn exists_by_email(&self, email: &str) -> WorkforceResult<bool>;

    /// Employees referencing the department
    async fn find_by_department(&self, department_id: &Uuid) -> WorkforceResult<Vec<Employee>>;

    /// Employees whose department carries this exact name
    async fn find_by_department_name(&self, name: &str) -> WorkforceResult<Vec<Employee>>;

    /// Salary within `[min, max]`, both ends inclusive
    async fn find_by_salary_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> WorkforceResult<Vec<Employee>>;

    /// Hired strictly after `date`
    async fn find_hired_after(&self, date: NaiveDate) -> WorkforceResult<Vec<Employee>>;

    /// Case-insensitive substring match on first or last name
    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Employee>>;

    async fn find_without_department(&self) -> WorkforceResult<Vec<Employee>>;

    async fn count_by_department(&self, department_id: &Uuid) -> WorkforceResult<u64>;

    /// Mean salary of the department's employees, `None` when it has none
    async fn average_salary_by_department(
        &self,
        department_id: &Uuid,
    ) -> WorkforceResult<Option<Decimal>>;
}

#[async_trait]
pub trait DepartmentStore: DataService<Department> {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Department>>;

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool>;

    /// Departments with at least one employee earning strictly more than `amount`
    async fn find_with_salary_above(&self, amount: Decimal) -> WorkforceResult<Vec<Department>>;
}

#[async_trait]
pub trait ProjectStore: DataService<Project> {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Project>>;

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool>;

    /// No end date, or an end date strictly after `today`
    async fn find_active_on(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>>;

    /// End date strictly before `today`
    async fn find_ended_before(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>>;

    /// Start date within `[from, to]`
    async fn find_started_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> WorkforceResult<Vec<Project>>;

    /// Case-insensitive substring match on the name
    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Project>>;

    async fn find_without_employees(&self) -> WorkforceResult<Vec<Project>>;

    /// Projects staffed by strictly more than `count` employees
    async fn find_with_more_employees_than(&self, count: u64) -> WorkforceResult<Vec<Project>>;
}
