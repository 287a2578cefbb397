//! End-to-end scenarios driven through the REST API

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_single_employee_department_average() {
    let server = server();

    let it: Value = server
        .post("/api/departments")
        .json(&json!({ "name": "IT" }))
        .await
        .json();
    let juan: Value = server
        .post("/api/employees")
        .json(&employee_json("juan@x.com", "50000.00"))
        .await
        .json();

    server
        .put(&format!("/api/employees/{}/department/{}", id_of(&juan), id_of(&it)))
        .await
        .assert_status_ok();

    let average = server
        .get(&format!("/api/departments/{}/average-salary", id_of(&it)))
        .await;
    average.assert_status_ok();
    average.assert_json(&json!("50000.00"));
}

#[tokio::test]
async fn test_staffed_department_average_count_and_delete() {
    let server = server();

    let it: Value = server
        .post("/api/departments")
        .json(&json!({ "name": "IT" }))
        .await
        .json();
    let it_id = id_of(&it);

    for (email, salary) in [("juan@x.com", "50000.00"), ("ana@x.com", "45000.00")] {
        let mut body = employee_json(email, salary);
        body["department_id"] = json!(it_id);
        server
            .post("/api/employees")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .get(&format!("/api/departments/{}/average-salary", it_id))
        .await
        .assert_json(&json!("47500.00"));
    server
        .get(&format!("/api/departments/{}/employee-count", it_id))
        .await
        .assert_json(&json!(2));
    server
        .get(&format!("/api/departments/{}/can-delete", it_id))
        .await
        .assert_json(&json!(false));

    let response = server
        .delete(&format!("/api/departments/{}", it_id))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_STATE");
}

#[tokio::test]
async fn test_duplicate_project_name() {
    let server = server();

    server
        .post("/api/projects")
        .json(&json!({
            "name": "Alpha",
            "start_date": "2024-01-01",
            "end_date": "2024-06-01"
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/projects")
        .json(&json!({ "name": "Alpha" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "DUPLICATE_NAME");
}

#[tokio::test]
async fn test_project_dates_out_of_order() {
    let server = server();

    let response = server
        .post("/api/projects")
        .json(&json!({
            "name": "Backwards",
            "start_date": "2024-06-01",
            "end_date": "2024-01-01"
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_ARGUMENT");

    server
        .get("/api/projects")
        .await
        .assert_json(&json!([]));
}

#[tokio::test]
async fn test_batch_assignment_is_all_or_nothing() {
    let server = server();

    let alpha: Value = server
        .post("/api/projects")
        .json(&json!({ "name": "Alpha" }))
        .await
        .json();
    let juan: Value = server
        .post("/api/employees")
        .json(&employee_json("juan@x.com", "50000.00"))
        .await
        .json();
    let alpha_id = id_of(&alpha);

    let response = server
        .put(&format!("/api/projects/{}/employees", alpha_id))
        .json(&json!([id_of(&juan), uuid::Uuid::new_v4()]))
        .await;
    response.assert_status_not_found();

    server
        .get(&format!("/api/projects/{}/employee-count", alpha_id))
        .await
        .assert_json(&json!(0));

    server
        .put(&format!("/api/projects/{}/employees", alpha_id))
        .json(&json!([id_of(&juan)]))
        .await
        .assert_status_ok();

    let projects: Value = server
        .get(&format!("/api/employees/{}/projects", id_of(&juan)))
        .await
        .json();
    assert_eq!(projects.as_array().unwrap().len(), 1);
    assert_eq!(projects[0]["name"], "Alpha");
}
