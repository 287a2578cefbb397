//! Department entity and its request draft

use crate::core::entity::Entity;
use crate::core::validation::validators::not_blank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// An organizational unit; its members are the employees referencing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Department {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: &DepartmentDraft) {
        self.name = draft.name.clone();
        self.description = draft.description.clone();
        self.updated_at = Utc::now();
    }
}

impl Entity for Department {
    fn resource_name() -> &'static str {
        "departments"
    }

    fn resource_name_singular() -> &'static str {
        "department"
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

/// Payload for creating or replacing a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DepartmentDraft {
    #[validate(
        length(max = 100, message = "must be at most 100 characters"),
        custom(function = "not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "must be at most 500 characters"))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let draft = DepartmentDraft {
            name: "  ".to_string(),
            description: None,
        };
        assert!(draft.validate().unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_long_description_rejected() {
        let draft = DepartmentDraft {
            name: "IT".to_string(),
            description: Some("x".repeat(501)),
        };
        assert!(
            draft
                .validate()
                .unwrap_err()
                .field_errors()
                .contains_key("description")
        );
    }

    #[test]
    fn test_apply_overwrites_description() {
        let mut department = Department::new("IT", Some("Tech".to_string()));
        department.apply(&DepartmentDraft {
            name: "Engineering".to_string(),
            description: None,
        });
        assert_eq!(department.name, "Engineering");
        assert!(department.description.is_none());
    }
}
