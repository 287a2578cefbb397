//! Project entity and its request draft

use crate::core::entity::Entity;
use crate::core::validation::validators::not_blank;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A unit of work staffed through the assignment set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Active while there is no end date or the end date is still ahead
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.end_date.is_none_or(|end| end > today)
    }

    /// Ended strictly before `today`
    pub fn ended_before(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < today)
    }

    pub fn apply(&mut self, draft: &ProjectDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.updated_at = Utc::now();
    }
}

impl Entity for Project {
    fn resource_name() -> &'static str {
        "projects"
    }

    fn resource_name_singular() -> &'static str {
        "project"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Payload for creating or replacing a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectDraft {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ProjectDraft {
    /// False only when both dates are present and the start is after the end
    pub fn dates_in_order(&self) -> bool {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}
