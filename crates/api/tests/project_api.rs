//! Integration tests for the saved-projects endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, delete, get, send_json};
use serde_json::json;
use sqlx::SqlitePool;

fn facts(name: &str, last: &str) -> serde_json::Value {
    json!({
        "projectName": name,
        "state": "California",
        "role": "Supplier",
        "contractWith": "Subcontractor",
        "projectType": "Private",
        "firstFurnishingDate": "2024-01-05",
        "lastFurnishingDate": last,
        "projectCompletionDate": null
    })
}

/// Run the engine and return the unsaved result payload.
async fn calculate(pool: &SqlitePool, name: &str, last: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/api/v1/calculations", &facts(name, last)).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn save_assigns_an_id_and_persists(pool: SqlitePool) {
    let result = calculate(&pool, "Depot Renovation", "2024-02-20").await;

    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/api/v1/projects", &result).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = body_json(response).await["data"].clone();

    let id = saved["id"].as_str().expect("saved project must have an id");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let loaded = body_json(response).await["data"].clone();
    assert_eq!(loaded, saved);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn resaving_keeps_the_same_id(pool: SqlitePool) {
    let result = calculate(&pool, "Depot Renovation", "2024-02-20").await;

    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/api/v1/projects", &result).await;
    let saved = body_json(response).await["data"].clone();

    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/api/v1/projects", &saved).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let resaved = body_json(response).await["data"].clone();
    assert_eq!(resaved["id"], saved["id"]);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    let projects = body_json(response).await["data"].clone();
    assert_eq!(projects.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_saved_projects(pool: SqlitePool) {
    for (name, last) in [("First", "2024-01-10"), ("Second", "2024-02-10")] {
        let result = calculate(&pool, name, last).await;
        let app = common::build_test_app(pool.clone());
        let response = send_json(app, "POST", "/api/v1/projects", &result).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let projects = body_json(response).await["data"].clone();
    let names: Vec<_> = projects
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["projectDetails"]["projectName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"First".to_string()));
    assert!(names.contains(&"Second".to_string()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_removes_the_project(pool: SqlitePool) {
    let result = calculate(&pool, "Short Lived", "2024-03-01").await;
    let app = common::build_test_app(pool.clone());
    let response = send_json(app, "POST", "/api/v1/projects", &result).await;
    let saved = body_json(response).await["data"].clone();
    let id = saved["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    // Deleting again reports not found.
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_project_id_returns_not_found(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/projects/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
