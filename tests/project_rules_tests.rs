//! Project rule engine behaviour over the in-memory store

mod common;

use common::*;
use workforce::prelude::*;

async fn hire(services: &Services, email: &str) -> Employee {
    services
        .employees
        .create(employee_draft(email, "50000.00"))
        .await
        .unwrap()
}

mod lifecycle_tests {
    use super::*;

    #[tokio::test]
    async fn test_equal_start_and_end_dates_are_accepted() {
        let project = services()
            .projects
            .create(project_draft(
                "Alpha",
                Some(date(2024, 1, 1)),
                Some(date(2024, 1, 1)),
            ))
            .await
            .unwrap();
        assert_eq!(project.start_date, project.end_date);
    }

    #[tokio::test]
    async fn test_update_renames_and_checks_uniqueness() {
        let services = services();
        services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let beta = services
            .projects
            .create(project_draft("Beta", None, None))
            .await
            .unwrap();

        let err = services
            .projects
            .update(&beta.id, project_draft("Alpha", None, None))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_NAME");

        let renamed = services
            .projects
            .update(
                &beta.id,
                ProjectDraft {
                    name: "Gamma".to_string(),
                    description: Some("Renamed".to_string()),
                    start_date: Some(date(2024, 2, 1)),
                    end_date: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(renamed.name, "Gamma");
        assert_eq!(renamed.start_date, Some(date(2024, 2, 1)));
        assert!(services.projects.name_exists("Gamma").await.unwrap());
        assert!(!services.projects.name_exists("Beta").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_staffed_project_is_allowed() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let juan = hire(&services, "juan@x.com").await;
        services
            .projects
            .assign_employee(&alpha.id, &juan.id)
            .await
            .unwrap();

        services.projects.delete(&alpha.id).await.unwrap();

        assert!(services.employees.projects_of(&juan.id).await.unwrap().is_empty());
        let err = services.projects.fetch_by_id(&alpha.id).await.unwrap_err();
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }
}

mod activity_tests {
    use super::*;

    #[tokio::test]
    async fn test_is_active_uses_strictly_future_end_date() {
        let services = services();
        let open = services
            .projects
            .create(project_draft("Open", None, None))
            .await
            .unwrap();
        let tomorrow = services
            .projects
            .create(project_draft("Tomorrow", None, today().succ_opt()))
            .await
            .unwrap();
        let ends_today = services
            .projects
            .create(project_draft("Today", None, Some(today())))
            .await
            .unwrap();

        assert!(services.projects.is_active(&open.id).await.unwrap());
        assert!(services.projects.is_active(&tomorrow.id).await.unwrap());
        assert!(!services.projects.is_active(&ends_today.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_activity_is_evaluated_at_call_time() {
        let project = project_draft("Alpha", None, Some(date(2024, 7, 1)));

        let before = services_on(date(2024, 6, 30));
        let alpha = before.projects.create(project.clone()).await.unwrap();
        assert!(before.projects.is_active(&alpha.id).await.unwrap());

        let after = services_on(date(2024, 7, 1));
        let alpha = after.projects.create(project).await.unwrap();
        assert!(!after.projects.is_active(&alpha.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_finalize_twice_keeps_the_same_end_date() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", Some(date(2024, 1, 1)), None))
            .await
            .unwrap();

        let first = services.projects.finalize(&alpha.id).await.unwrap();
        let second = services.projects.finalize(&alpha.id).await.unwrap();
        assert_eq!(first.end_date, Some(today()));
        assert_eq!(second.end_date, Some(today()));
    }

    #[tokio::test]
    async fn test_finalize_unknown_project_is_not_found() {
        let err = services()
            .projects
            .finalize(&Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_started_between_is_inclusive() {
        let services = services();
        for (name, start) in [
            ("Jan", date(2024, 1, 1)),
            ("Feb", date(2024, 2, 1)),
            ("Mar", date(2024, 3, 1)),
        ] {
            services
                .projects
                .create(project_draft(name, Some(start), None))
                .await
                .unwrap();
        }
        services
            .projects
            .create(project_draft("Undated", None, None))
            .await
            .unwrap();

        let found = services
            .projects
            .started_between(date(2024, 1, 1), date(2024, 2, 1))
            .await
            .unwrap();
        let mut names: Vec<String> = found.into_iter().map(|p| p.name).collect();
        names.sort();
        assert_eq!(names, vec!["Feb".to_string(), "Jan".to_string()]);
    }
}

mod staffing_tests {
    use super::*;

    #[tokio::test]
    async fn test_assign_many_adds_every_employee() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let a = hire(&services, "a@x.com").await;
        let b = hire(&services, "b@x.com").await;

        services
            .projects
            .assign_many(&alpha.id, &[a.id, b.id, a.id])
            .await
            .unwrap();
        assert_eq!(services.projects.count_employees(&alpha.id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_assign_many_with_unknown_employee_writes_nothing() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let a = hire(&services, "a@x.com").await;

        let err = services
            .projects
            .assign_many(&alpha.id, &[a.id, Uuid::new_v4()])
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
        assert_eq!(services.projects.count_employees(&alpha.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_employee_is_idempotent() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let a = hire(&services, "a@x.com").await;

        services
            .projects
            .assign_employee(&alpha.id, &a.id)
            .await
            .unwrap();
        services
            .projects
            .remove_employee(&alpha.id, &a.id)
            .await
            .unwrap();
        services
            .projects
            .remove_employee(&alpha.id, &a.id)
            .await
            .unwrap();
        assert!(services.projects.employees_of(&alpha.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_headcount_queries() {
        let services = services();
        let alpha = services
            .projects
            .create(project_draft("Alpha", None, None))
            .await
            .unwrap();
        let beta = services
            .projects
            .create(project_draft("Beta", None, None))
            .await
            .unwrap();
        let empty = services
            .projects
            .create(project_draft("Empty", None, None))
            .await
            .unwrap();
        let a = hire(&services, "a@x.com").await;
        let b = hire(&services, "b@x.com").await;

        services
            .projects
            .assign_many(&alpha.id, &[a.id, b.id])
            .await
            .unwrap();
        services
            .projects
            .assign_employee(&beta.id, &a.id)
            .await
            .unwrap();

        let busy = services.projects.with_more_employees_than(1).await.unwrap();
        assert_eq!(busy.len(), 1);
        assert_eq!(busy[0].id, alpha.id);

        let idle = services.projects.without_employees().await.unwrap();
        assert_eq!(idle.len(), 1);
        assert_eq!(idle[0].id, empty.id);

        assert_eq!(services.projects.count_employees(&Uuid::new_v4()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_by_name_ignores_case() {
        let services = services();
        services
            .projects
            .create(project_draft("Apollo Migration", None, None))
            .await
            .unwrap();
        services
            .projects
            .create(project_draft("Billing", None, None))
            .await
            .unwrap();

        let hits = services.projects.search_by_name("migration").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Apollo Migration");
        assert_eq!(
            services.projects.find_by_name("Billing").await.unwrap().name,
            "Billing"
        );
    }
}
