//! Entity trait defining the shared metadata of every persisted record

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all entities in the system.
///
/// Every entity has:
/// - id: Unique identifier, generated on creation
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
///
/// The resource names are used in URLs, log fields and error messages.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "employees")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "employee")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the entity type name
    fn entity_type(&self) -> &'static str {
        Self::resource_name_singular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Badge {
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    }

    impl Entity for Badge {
        fn resource_name() -> &'static str {
            "badges"
        }

        fn resource_name_singular() -> &'static str {
            "badge"
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

    #[test]
    fn test_entity_metadata() {
        assert_eq!(Badge::resource_name(), "badges");
        assert_eq!(Badge::resource_name_singular(), "badge");
    }

    #[test]
    fn test_entity_type_defaults_to_singular_name() {
        let now = Utc::now();
        let badge = Badge {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(badge.entity_type(), "badge");
        assert!(badge.updated_at() >= badge.created_at());
    }
}
