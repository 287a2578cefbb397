//! Employee rules

use super::{Stores, found};
use crate::core::clock::Clock;
use crate::core::error::{EntityError, WorkforceError, WorkforceResult};
use crate::core::validation;
use crate::entities::{Employee, EmployeeDraft, Project, max_salary, min_salary, money};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct EmployeeService {
    stores: Stores,
    clock: Arc<dyn Clock>,
}

impl EmployeeService {
    pub fn new(stores: Stores, clock: Arc<dyn Clock>) -> Self {
        Self { stores, clock }
    }

    /// Validate the draft and return its hire date and salary in cents.
    ///
    /// Hire dates are compared against the injected clock.
    fn check_draft(&self, draft: &EmployeeDraft) -> WorkforceResult<(NaiveDate, Decimal)> {
        validation::check(draft)?;
        let (hire_date, salary) = draft.hire_date_and_salary()?;
        if hire_date > self.clock.today() {
            return Err(WorkforceError::invalid_argument(
                "hire_date: must not be in the future",
            ));
        }
        let salary = money(salary);
        if salary < min_salary() || salary > max_salary() {
            return Err(WorkforceError::invalid_argument(format!(
                "salary: must be between {} and {}",
                min_salary(),
                max_salary()
            )));
        }
        Ok((hire_date, salary))
    }

    async fn ensure_department(&self, department_id: Option<Uuid>) -> WorkforceResult<()> {
        if let Some(department_id) = department_id {
            found(
                self.stores.departments.get(&department_id).await?,
                &department_id,
            )?;
        }
        Ok(())
    }

    pub async fn create(&self, draft: EmployeeDraft) -> WorkforceResult<Employee> {
        if self.stores.employees.exists_by_email(&draft.email).await? {
            tracing::warn!(email = %draft.email, "rejected employee with duplicate email");
            return Err(EntityError::DuplicateEmail { email: draft.email }.into());
        }
        let (hire_date, salary) = self.check_draft(&draft)?;
        self.ensure_department(draft.department_id).await?;

        let employee = Employee::new(
            draft.first_name,
            draft.last_name,
            draft.email,
            hire_date,
            salary,
            draft.department_id,
        );
        let employee = self.stores.employees.create(employee).await?;
        tracing::info!(employee_id = %employee.id, "employee created");
        Ok(employee)
    }

    pub async fn fetch_by_id(&self, id: &Uuid) -> WorkforceResult<Employee> {
        found(self.stores.employees.get(id).await?, id)
    }

    pub async fn list(&self) -> WorkforceResult<Vec<Employee>> {
        self.stores.employees.list().await
    }

    /// Replace the employee's fields.
    ///
    /// Uniqueness is only re-checked when the email actually changes.
    pub async fn update(&self, id: &Uuid, draft: EmployeeDraft) -> WorkforceResult<Employee> {
        let mut employee = self.fetch_by_id(id).await?;

        if draft.email != employee.email {
            let owner = self.stores.employees.find_by_email(&draft.email).await?;
            if owner.is_some_and(|owner| owner.id != employee.id) {
                tracing::warn!(employee_id = %id, email = %draft.email, "email already in use");
                return Err(EntityError::DuplicateEmail { email: draft.email }.into());
            }
        }

        let (hire_date, salary) = self.check_draft(&draft)?;
        self.ensure_department(draft.department_id).await?;

        employee.apply(&draft, hire_date, salary);
        let employee = self.stores.employees.update(id, employee).await?;
        tracing::info!(employee_id = %id, "employee updated");
        Ok(employee)
    }

    pub async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        self.fetch_by_id(id).await?;
        self.stores.employees.delete(id).await?;
        tracing::info!(employee_id = %id, "employee deleted");
        Ok(())
    }

    pub async fn assign_to_department(
        &self,
        employee_id: &Uuid,
        department_id: &Uuid,
    ) -> WorkforceResult<()> {
        let mut employee = self.fetch_by_id(employee_id).await?;
        found(
            self.stores.departments.get(department_id).await?,
            department_id,
        )?;

        employee.department_id = Some(*department_id);
        employee.touch();
        self.stores.employees.update(employee_id, employee).await?;
        tracing::info!(employee_id = %employee_id, department_id = %department_id, "employee moved to department");
        Ok(())
    }

    pub async fn assign_to_project(
        &self,
        employee_id: &Uuid,
        project_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(employee_id).await?;
        found(self.stores.projects.get(project_id).await?, project_id)?;

        self.stores.assignments.assign(employee_id, project_id).await?;
        tracing::info!(employee_id = %employee_id, project_id = %project_id, "employee assigned to project");
        Ok(())
    }

    pub async fn remove_from_project(
        &self,
        employee_id: &Uuid,
        project_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(employee_id).await?;
        found(self.stores.projects.get(project_id).await?, project_id)?;

        self.stores
            .assignments
            .unassign(employee_id, project_id)
            .await?;
        tracing::info!(employee_id = %employee_id, project_id = %project_id, "employee removed from project");
        Ok(())
    }

    /// Employees earning within `[min, max]`
    pub async fn salary_range(&self, min: Decimal, max: Decimal) -> WorkforceResult<Vec<Employee>> {
        if min > max {
            tracing::warn!(%min, %max, "rejected inverted salary range");
            return Err(WorkforceError::invalid_argument(
                "Minimum salary cannot be greater than maximum salary",
            ));
        }
        self.stores.employees.find_by_salary_between(min, max).await
    }

    pub async fn find_by_email(&self, email: &str) -> WorkforceResult<Employee> {
        self.stores
            .employees
            .find_by_email(email)
            .await?
            .ok_or_else(|| {
                EntityError::NotFoundByKey {
                    entity_type: "employee".to_string(),
                    field: "email".to_string(),
                    value: email.to_string(),
                }
                .into()
            })
    }

    pub async fn find_by_department_name(&self, name: &str) -> WorkforceResult<Vec<Employee>> {
        self.stores.employees.find_by_department_name(name).await
    }

    /// Hired strictly after `date`
    pub async fn hired_after(&self, date: NaiveDate) -> WorkforceResult<Vec<Employee>> {
        self.stores.employees.find_hired_after(date).await
    }

    pub async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Employee>> {
        tracing::debug!(term, "searching employees by name");
        self.stores.employees.search_by_name(term).await
    }

    pub async fn without_department(&self) -> WorkforceResult<Vec<Employee>> {
        self.stores.employees.find_without_department().await
    }

    pub async fn projects_of(&self, employee_id: &Uuid) -> WorkforceResult<Vec<Project>> {
        self.fetch_by_id(employee_id).await?;
        self.stores.assignments.projects_of(employee_id).await
    }

    pub async fn email_exists(&self, email: &str) -> WorkforceResult<bool> {
        self.stores.employees.exists_by_email(email).await
    }
}
