//! Project rules

use super::{Stores, found};
use crate::core::clock::Clock;
use crate::core::error::{EntityError, WorkforceError, WorkforceResult};
use crate::core::validation;
use crate::entities::{Employee, Project, ProjectDraft};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct ProjectService {
    stores: Stores,
    clock: Arc<dyn Clock>,
}

impl ProjectService {
    pub fn new(stores: Stores, clock: Arc<dyn Clock>) -> Self {
        Self { stores, clock }
    }

    fn duplicate(name: String) -> WorkforceError {
        tracing::warn!(name = %name, "project name already in use");
        EntityError::DuplicateName {
            entity_type: "project".to_string(),
            name,
        }
        .into()
    }

    fn check_draft(draft: &ProjectDraft) -> WorkforceResult<()> {
        validation::check(draft)?;
        if !draft.dates_in_order() {
            return Err(WorkforceError::invalid_argument(
                "Start date cannot be after end date",
            ));
        }
        Ok(())
    }

    pub async fn create(&self, draft: ProjectDraft) -> WorkforceResult<Project> {
        if self.stores.projects.exists_by_name(&draft.name).await? {
            return Err(Self::duplicate(draft.name));
        }
        Self::check_draft(&draft)?;

        let project = Project::new(
            draft.name,
            draft.description,
            draft.start_date,
            draft.end_date,
        );
        let project = self.stores.projects.create(project).await?;
        tracing::info!(project_id = %project.id, "project created");
        Ok(project)
    }

    pub async fn fetch_by_id(&self, id: &Uuid) -> WorkforceResult<Project> {
        found(self.stores.projects.get(id).await?, id)
    }

    pub async fn list(&self) -> WorkforceResult<Vec<Project>> {
        self.stores.projects.list().await
    }

    pub async fn update(&self, id: &Uuid, draft: ProjectDraft) -> WorkforceResult<Project> {
        let mut project = self.fetch_by_id(id).await?;

        if draft.name != project.name {
            let owner = self.stores.projects.find_by_name(&draft.name).await?;
            if owner.is_some_and(|owner| owner.id != project.id) {
                return Err(Self::duplicate(draft.name));
            }
        }
        Self::check_draft(&draft)?;

        project.apply(&draft);
        let project = self.stores.projects.update(id, project).await?;
        tracing::info!(project_id = %id, "project updated");
        Ok(project)
    }

    /// Delete the project; its memberships go with it
    pub async fn delete(&self, id: &Uuid) -> WorkforceResult<()> {
        self.fetch_by_id(id).await?;
        self.stores.projects.delete(id).await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(())
    }

    /// Evaluated against today's date at call time
    pub async fn is_active(&self, id: &Uuid) -> WorkforceResult<bool> {
        let project = self.fetch_by_id(id).await?;
        Ok(project.is_active_on(self.clock.today()))
    }

    /// Close the project today
    pub async fn finalize(&self, id: &Uuid) -> WorkforceResult<Project> {
        let mut project = self.fetch_by_id(id).await?;
        let today = self.clock.today();

        if project.start_date.is_some_and(|start| start > today) {
            tracing::warn!(project_id = %id, "refused to finalize a project that has not started");
            return Err(WorkforceError::invalid_state(
                "Cannot finalize a project before its start date",
            ));
        }

        project.end_date = Some(today);
        project.updated_at = chrono::Utc::now();
        let project = self.stores.projects.update(id, project).await?;
        tracing::info!(project_id = %id, end_date = %today, "project finalized");
        Ok(project)
    }

    pub async fn assign_employee(
        &self,
        project_id: &Uuid,
        employee_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(project_id).await?;
        found(self.stores.employees.get(employee_id).await?, employee_id)?;

        self.stores.assignments.assign(employee_id, project_id).await?;
        tracing::info!(project_id = %project_id, employee_id = %employee_id, "employee assigned to project");
        Ok(())
    }

    pub async fn remove_employee(
        &self,
        project_id: &Uuid,
        employee_id: &Uuid,
    ) -> WorkforceResult<()> {
        self.fetch_by_id(project_id).await?;
        found(self.stores.employees.get(employee_id).await?, employee_id)?;

        self.stores
            .assignments
            .unassign(employee_id, project_id)
            .await?;
        tracing::info!(project_id = %project_id, employee_id = %employee_id, "employee removed from project");
        Ok(())
    }

    /// Assign every employee or none of them
    pub async fn assign_many(
        &self,
        project_id: &Uuid,
        employee_ids: &[Uuid],
    ) -> WorkforceResult<()> {
        self.fetch_by_id(project_id).await?;
        for employee_id in employee_ids {
            found(self.stores.employees.get(employee_id).await?, employee_id)?;
        }

        self.stores
            .assignments
            .assign_many(project_id, employee_ids)
            .await?;
        tracing::info!(project_id = %project_id, count = employee_ids.len(), "employees assigned to project");
        Ok(())
    }

    /// Projects staffed by strictly more than `count` employees
    pub async fn with_more_employees_than(&self, count: u64) -> WorkforceResult<Vec<Project>> {
        self.stores.projects.find_with_more_employees_than(count).await
    }

    pub async fn find_by_name(&self, name: &str) -> WorkforceResult<Project> {
        self.stores
            .projects
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                EntityError::NotFoundByKey {
                    entity_type: "project".to_string(),
                    field: "name".to_string(),
                    value: name.to_string(),
                }
                .into()
            })
    }

    pub async fn active(&self) -> WorkforceResult<Vec<Project>> {
        self.stores.projects.find_active_on(self.clock.today()).await
    }

    /// Projects whose end date has passed
    pub async fn inactive(&self) -> WorkforceResult<Vec<Project>> {
        self.stores
            .projects
            .find_ended_before(self.clock.today())
            .await
    }

    /// Start date within `[from, to]`
    pub async fn started_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> WorkforceResult<Vec<Project>> {
        if from > to {
            tracing::warn!(%from, %to, "rejected inverted date range");
            return Err(WorkforceError::invalid_argument(
                "Start of the range cannot be after its end",
            ));
        }
        self.stores.projects.find_started_between(from, to).await
    }

    pub async fn search_by_name(&self, term: &str) -> WorkforceResult<Vec<Project>> {
        tracing::debug!(term, "searching projects by name");
        self.stores.projects.search_by_name(term).await
    }

    pub async fn employees_of(&self, id: &Uuid) -> WorkforceResult<Vec<Employee>> {
        self.fetch_by_id(id).await?;
        self.stores.assignments.employees_of(id).await
    }

    /// Zero for an unknown project
    pub async fn count_employees(&self, id: &Uuid) -> WorkforceResult<u64> {
        self.stores.assignments.count_for_project(id).await
    }

    pub async fn without_employees(&self) -> WorkforceResult<Vec<Project>> {
        self.stores.projects.find_without_employees().await
    }

    pub async fn name_exists(&self, name: &str) -> WorkforceResult<bool> {
        self.stores.projects.exists_by_name(name).await
    }
}
