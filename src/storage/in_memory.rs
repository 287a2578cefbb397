//! In-memory implementation of every store for testing and development

use crate::core::entity::Entity;
use crate::core::error::{EntityError, StorageError, WorkforceError, WorkforceResult};
use crate::core::service::{AssignmentService, DataService};
use crate::core::store::{DepartmentStore, EmployeeStore, ProjectStore};
use crate::entities::{Assignment, Department, Employee, Project};
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

#[derive(Default)]
struct State {
    employees: HashMap<Uuid, Employee>,
    departments: HashMap<Uuid, Department>,
    projects: HashMap<Uuid, Project>,
    assignments: HashMap<(Uuid, Uuid), Assignment>,
}

impl State {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.employees
            .values()
            .any(|e| e.email == email && Some(e.id) != except)
    }

    fn department_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.departments
            .values()
            .any(|d| d.name == name && Some(d.id) != except)
    }

    fn project_name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.projects
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }

    fn check_employee(&self, employee: &Employee, except: Option<Uuid>) -> WorkforceResult<()> {
        if self.email_taken(&employee.email, except) {
            return Err(EntityError::DuplicateEmail {
                email: employee.email.clone(),
            }
            .into());
        }
        match employee.department_id {
            Some(department_id) if !self.departments.contains_key(&department_id) => Err(
                WorkforceError::not_found(Department::resource_name_singular(), department_id),
            ),
            _ => Ok(()),
        }
    }

    fn staff_count(&self, project_id: &Uuid) -> u64 {
        self.assignments
            .keys()
            .filter(|(_, p)| p == project_id)
            .count() as u64
    }
}

/// Insertion-ordered view over a map of entities
fn ordered<T: Entity>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by_key(|item| (item.created_at(), item.id()));
    items
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// In-memory store implementation
///
/// One lock guards every collection, so each gateway call sees and leaves a
/// consistent state. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> WorkforceResult<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|e| {
            StorageError::Poisoned {
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> WorkforceResult<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|e| {
            StorageError::Poisoned {
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

// =============================================================================
// Employees
// =============================================================================

#[async_trait]
impl DataService<Employee> for InMemoryStore {
    async fn create(&self, employee: Employee) -> WorkforceResult<Employee> {
        let mut state = self.write()?;
        state.check_employee(&employee, None)?;
        state.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Employee>> {
        Ok(self.read()?.employees.get(id).cloned())
    }

    async fn list(&self) -> WorkforceResult<Vec<Employee>> {
        Ok(ordered(self.read()?.employees.values().cloned()))
    }

    async fn update(&self, id: &Uuid, employee: Employee) -> WorkforceResult<Employee> {
        let mut state = self.write()?;
        if !state.employees.contains_key(id) {
            return Err(WorkforceError::not_found(
                Employee::resource_name_singular(),
                *id,
            ));
        }
        state.check_employee(&employee, Some(*id))?;
        state.employees.insert(*id, employee.clone());
        Ok(employee)
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        let mut state = self.write()?;
        state.employees.remove(id);
        state.assignments.retain(|(employee_id, _), _| employee_id != id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> WorkforceResult<Option<Employee>> {
        Ok(self
            .read()?
            .employees
            .values()
            .find(|e| e.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> WorkforceResult<bool> {
        Ok(self.read()?.email_taken(email, None))
    }

    async fn find_by_department(&self, department_id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| e.department_id.as_ref() == Some(department_id))
                .cloned(),
        ))
    }

    async fn find_by_department_name(&self, name: &str) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        let departments: HashSet<Uuid> = state
            .departments
            .values()
            .filter(|d| d.name == name)
            .map(|d| d.id)
            .collect();
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| e.department_id.is_some_and(|d| departments.contains(&d)))
                .cloned(),
        ))
    }

    async fn find_by_salary_between(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| e.salary >= min && e.salary <= max)
                .cloned(),
        ))
    }

    async fn find_hired_after(&self, date: NaiveDate) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| e.hire_date > date)
                .cloned(),
        ))
    }

    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| {
                    contains_ignore_case(&e.first_name, term)
                        || contains_ignore_case(&e.last_name, term)
                })
                .cloned(),
        ))
    }

    async fn find_without_department(&self) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .employees
                .values()
                .filter(|e| e.department_id.is_none())
                .cloned(),
        ))
    }

    async fn count_by_department(&self, department_id: &Uuid) -> WorkforceResult<u64> {
        Ok(self
            .read()?
            .employees
            .values()
            .filter(|e| e.department_id.as_ref() == Some(department_id))
            .count() as u64)
    }

    async fn average_salary_by_department(
        &self,
        department_id: &Uuid,
    ) -> WorkforceResult<Option<Decimal>> {
        let state = self.read()?;
        let salaries: Vec<Decimal> = state
            .employees
            .values()
            .filter(|e| e.department_id.as_ref() == Some(department_id))
            .map(|e| e.salary)
            .collect();
        if salaries.is_empty() {
            return Ok(None);
        }
        let total: Decimal = salaries.iter().sum();
        Ok(Some(total / Decimal::from(salaries.len())))
    }
}

// =============================================================================
// Departments
// =============================================================================

#[async_trait]
impl DataService<Department> for InMemoryStore {
    async fn create(&self, department: Department) -> WorkforceResult<Department> {
        let mut state = self.write()?;
        if state.department_name_taken(&department.name, None) {
            return Err(EntityError::DuplicateName {
                entity_type: Department::resource_name_singular().to_string(),
                name: department.name,
            }
            .into());
        }
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Department>> {
        Ok(self.read()?.departments.get(id).cloned())
    }

    async fn list(&self) -> WorkforceResult<Vec<Department>> {
        Ok(ordered(self.read()?.departments.values().cloned()))
    }

    async fn update(&self, id: &Uuid, department: Department) -> WorkforceResult<Department> {
        let mut state = self.write()?;
        if !state.departments.contains_key(id) {
            return Err(WorkforceError::not_found(
                Department::resource_name_singular(),
                *id,
            ));
        }
        if state.department_name_taken(&department.name, Some(*id)) {
            return Err(EntityError::DuplicateName {
                entity_type: Department::resource_name_singular().to_string(),
                name: department.name,
            }
            .into());
        }
        state.departments.insert(*id, department.clone());
        Ok(department)
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        let mut state = self.write()?;
        if state
            .employees
            .values()
            .any(|e| e.department_id.as_ref() == Some(id))
        {
            return Err(WorkforceError::invalid_state(
                "Cannot delete a department that has employees assigned",
            ));
        }
        state.departments.remove(id);
        Ok(())
    }
}

#[async_trait]
impl DepartmentStore for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Department>> {
        Ok(self
            .read()?
            .departments
            .values()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool> {
        Ok(self.read()?.department_name_taken(name, None))
    }

    async fn find_with_salary_above(&self, amount: Decimal) -> WorkforceResult<Vec<Department>> {
        let state = self.read()?;
        let matching: HashSet<Uuid> = state
            .employees
            .values()
            .filter(|e| e.salary > amount)
            .filter_map(|e| e.department_id)
            .collect();
        Ok(ordered(
            state
                .departments
                .values()
                .filter(|d| matching.contains(&d.id))
                .cloned(),
        ))
    }
}

// =============================================================================
// Projects
// =============================================================================

#[async_trait]
impl DataService<Project> for InMemoryStore {
    async fn create(&self, project: Project) -> WorkforceResult<Project> {
        let mut state = self.write()?;
        if state.project_name_taken(&project.name, None) {
            return Err(EntityError::DuplicateName {
                entity_type: Project::resource_name_singular().to_string(),
                name: project.name,
            }
            .into());
        }
        state.projects.insert(project.id, project.clone());
        Ok(project)
    }

    async fn get(&self, id: &Uuid) -> WorkforceResult<Option<Project>> {
        Ok(self.read()?.projects.get(id).cloned())
    }

    async fn list(&self) -> WorkforceResult<Vec<Project>> {
        Ok(ordered(self.read()?.projects.values().cloned()))
    }

    async fn update(&self, id: &Uuid, project: Project) -> WorkforceResult<Project> {
        let mut state = self.write()?;
        if !state.projects.contains_key(id) {
            return Err(WorkforceError::not_found(
                Project::resource_name_singular(),
                *id,
            ));
        }
        if state.project_name_taken(&project.name, Some(*id)) {
            return Err(EntityError::DuplicateName {
                entity_type: Project::resource_name_singular().to_string(),
                name: project.name,
            }
            .into());
        }
        state.projects.insert(*id, project.clone());
        Ok(project)
    }

    async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        let mut state = self.write()?;
        state.projects.remove(id);
        state.assignments.retain(|(_, project_id), _| project_id != id);
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for InMemoryStore {
    async fn find_by_name(&self, name: &str) -> WorkforceResult<Option<Project>> {
        Ok(self
            .read()?
            .projects
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn exists_by_name(&self, name: &str) -> WorkforceResult<bool> {
        Ok(self.read()?.project_name_taken(name, None))
    }

    async fn find_active_on(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| p.is_active_on(today))
                .cloned(),
        ))
    }

    async fn find_ended_before(&self, today: NaiveDate) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| p.ended_before(today))
                .cloned(),
        ))
    }

    async fn find_started_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| p.start_date.is_some_and(|s| s >= from && s <= to))
                .cloned(),
        ))
    }

    async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| contains_ignore_case(&p.name, term))
                .cloned(),
        ))
    }

    async fn find_without_employees(&self) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| state.staff_count(&p.id) == 0)
                .cloned(),
        ))
    }

    async fn find_with_more_employees_than(&self, count: u64) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .projects
                .values()
                .filter(|p| state.staff_count(&p.id) > count)
                .cloned(),
        ))
    }
}

// =============================================================================
// Assignments
// =============================================================================

#[async_trait]
impl AssignmentService for InMemoryStore {
    async fn assign(&self, employee_id: &Uuid, project_id: &Uuid) -> WorkforceResult<()> {
        self.assign_many(project_id, std::slice::from_ref(employee_id))
            .await
    }

    async fn assign_many(&self, project_id: &Uuid, employee_ids: &[Uuid]) -> WorkforceResult<()> {
        let mut state = self.write()?;
        if !state.projects.contains_key(project_id) {
            return Err(WorkforceError::not_found(
                Project::resource_name_singular(),
                *project_id,
            ));
        }
        if let Some(missing) = employee_ids
            .iter()
            .find(|id| !state.employees.contains_key(*id))
        {
            return Err(WorkforceError::not_found(
                Employee::resource_name_singular(),
                *missing,
            ));
        }
        for employee_id in employee_ids {
            state
                .assignments
                .entry((*employee_id, *project_id))
                .or_insert_with(|| Assignment::new(*employee_id, *project_id));
        }
        Ok(())
    }

    async fn unassign(&self, employee_id: &Uuid, project_id: &Uuid) -> WorkforceResult<()> {
        self.write()?
            .assignments
            .remove(&(*employee_id, *project_id));
        Ok(())
    }

    async fn projects_of(&self, employee_id: &Uuid) -> WorkforceResult<Vec<Project>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .assignments
                .keys()
                .filter(|(e, _)| e == employee_id)
                .filter_map(|(_, p)| state.projects.get(p).cloned()),
        ))
    }

    async fn employees_of(&self, project_id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(ordered(
            state
                .assignments
                .keys()
                .filter(|(_, p)| p == project_id)
                .filter_map(|(e, _)| state.employees.get(e).cloned()),
        ))
    }

    async fn count_for_project(&self, project_id: &Uuid) -> WorkforceResult<u64> {
        Ok(self.read()?.staff_count(project_id))
    }
}
