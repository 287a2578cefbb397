//! Department rules

use super::{Stores, found};
use crate::core::error::{EntityError, WorkforceError, WorkforceResult};
use crate::core::validation;
use crate::entities::{Department, DepartmentDraft, Employee, money};
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Clone)]
pub struct DepartmentService {
    stores: Stores,
}

impl DepartmentService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    fn duplicate(name: String) -> WorkforceError {
        tracing::warn!(name = %name, "department name already in use");
        EntityError::DuplicateName {
            entity_type: "department".to_string(),
            name,
        }
        .into()
    }

    pub async fn create(&self, draft: DepartmentDraft) -> WorkforceResult<Department> {
        if self.stores.departments.exists_by_name(&draft.name).await? {
            return Err(Self::duplicate(draft.name));
        }
        validation::check(&draft)?;

        let department = self
            .stores
            .departments
            .create(Department::new(draft.name, draft.description))
            .await?;
        tracing::info!(department_id = %department.id, "department created");
        Ok(department)
    }

    pub async fn fetch_by_id(&self, id: &Uuid) -> WorkforceResult<Department> {
        found(self.stores.departments.get(id).await?, id)
    }

    pub async fn list(&self) -> WorkforceResult<Vec<Department>> {
        self.stores.departments.list().await
    }

    pub async fn update(&self, id: &Uuid, draft: DepartmentDraft) -> WorkforceResult<Department> {
        let mut department = self.fetch_by_id(id).await?;

        if draft.name != department.name {
            let owner = self.stores.departments.find_by_name(&draft.name).await?;
            if owner.is_some_and(|owner| owner.id != department.id) {
                return Err(Self::duplicate(draft.name));
            }
        }
        validation::check(&draft)?;

        department.apply(&draft);
        let department = self.stores.departments.update(id, department).await?;
        tracing::info!(department_id = %id, "department updated");
        Ok(department)
    }

    /// Delete a department that no employee references
    pub async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        let department = self.fetch_by_id(id).await?;
        let members = self.stores.employees.count_by_department(id).await?;
        if members > 0 {
            tracing::warn!(department_id = %id, members, "refused to delete staffed department");
            return Err(WorkforceError::invalid_state(format!(
                "Cannot delete department '{}': it has employees assigned",
                department.name
            )));
        }
        self.stores.departments.delete(id).await?;
        tracing::info!(department_id = %id, "department deleted");
        Ok(())
    }

    /// Mean salary rounded to cents; zero for a department without employees
    pub async fn average_salary(&self, id: &Uuid) -> WorkforceResult<Decimal> {
        let average = self
            .stores
            .employees
            .average_salary_by_department(id)
            .await?
            .unwrap_or(Decimal::ZERO);
        Ok(money(average))
    }

    /// Zero for an unknown department
    pub async fn count_employees(&self, id: &Uuid) -> WorkforceResult<u64> {
        self.stores.employees.count_by_department(id).await
    }

    pub async fn can_delete(&self, id: &Uuid) -> WorkforceResult<bool> {
        Ok(self.count_employees(id).await? == 0)
    }

    pub async fn add_employee(
        &self,
        department_id: &Uuid,
        employee_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(department_id).await?;
        let mut employee = found(self.stores.employees.get(employee_id).await?, employee_id)?;

        employee.department_id = Some(*department_id);
        employee.touch();
        self.stores.employees.update(employee_id, employee).await?;
        tracing::info!(department_id = %department_id, employee_id = %employee_id, "employee added to department");
        Ok(())
    }

    /// Clear the employee's department, which must be this one
    pub async fn remove_employee(
        &self,
        department_id: &Uuid,
        employee_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(department_id).await?;
        let mut employee = found(self.stores.employees.get(employee_id).await?, employee_id)?;

        if employee.department_id != Some(*department_id) {
            tracing::warn!(department_id = %department_id, employee_id = %employee_id, "employee is not a member");
            return Err(WorkforceError::invalid_argument(
                "Employee does not belong to this department",
            ));
        }

        employee.department_id = None;
        employee.touch();
        self.stores.employees.update(employee_id, employee).await?;
        tracing::info!(department_id = %department_id, employee_id = %employee_id, "employee removed from department");
        Ok(())
    }

    pub async fn find_by_name(&self, name: &str) -> WorkforceResult<Department> {
        self.stores
            .departments
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                EntityError::NotFoundByKey {
                    entity_type: "department".to_string(),
                    field: "name".to_string(),
                    value: name.to_string(),
                }
                .into()
            })
    }

    pub async fn employees_of(&self, id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        self.fetch_by_id(id).await?;
        self.stores.employees.find_by_department(id).await
    }

    /// Departments with at least one employee earning more than `amount`
    pub async fn with_salary_above(&self, amount: Decimal) -> WorkforceResult<Vec<Department>> {
        self.stores.departments.find_with_salary_above(amount).await
    }

    pub async fn name_exists(&self, name: &str) -> WorkforceResult<bool> {
        self.stores.departments.exists_by_name(name).await
    }
}
