mod common;

use axum::Router;
use axum_test::TestServer;
use campus_registry::api::routes::resource_routes;
use serde_json::json;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> TestServer {
    let state = common::create_test_state(pool);
    let app: Router = resource_routes().with_state(state);
    TestServer::new(app).unwrap()
}

// ─── LIST ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_students_list_empty(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/students").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_students_list_returns_all(pool: SqlitePool) {
    let server = make_server(pool.clone());

    common::create_test_student(&pool, "Linh", 20).await;
    common::create_test_student(&pool, "John", 22).await;

    let response = server.get("/students").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Linh");
    assert_eq!(items[1]["name"], "John");
}

#[sqlx::test]
async fn test_students_list_counts_creates_and_deletes(pool: SqlitePool) {
    let server = make_server(pool);

    for i in 0..5 {
        server
            .post("/students")
            .json(&json!({ "name": format!("Student {i}"), "age": 20 }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    server.delete("/students/1").await.assert_status(axum::http::StatusCode::NO_CONTENT);
    server.delete("/students/3").await.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get("/students").await;
    let body = response.json::<serde_json::Value>();

    assert_eq!(body.as_array().unwrap().len(), 3);
}

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_student_success(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .post("/students")
        .json(&json!({ "name": "Linh", "age": 20 }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["name"], "Linh");
    assert_eq!(body["age"], 20);
    assert!(body.get("id").is_some());
}

#[sqlx::test]
async fn test_create_then_retrieve_yields_equal_record(pool: SqlitePool) {
    let server = make_server(pool);

    let created = server
        .post("/students")
        .json(&json!({ "name": "Jane", "age": 21 }))
        .await
        .json::<serde_json::Value>();

    let id = created["id"].as_i64().unwrap();

    let response = server.get(&format!("/students/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), created);
}

#[sqlx::test]
async fn test_create_student_missing_fields(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let response = server.post("/students").json(&json!({})).await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    // Both omissions reported in a single response.
    assert!(body["error"]["details"].get("name").is_some());
    assert!(body["error"]["details"].get("age").is_some());

    assert_eq!(common::count_students(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_student_wrong_typed_age(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let response = server
        .post("/students")
        .json(&json!({ "name": "Linh", "age": "twenty" }))
        .await;

    // Type errors come back 400 in the same envelope as field omissions,
    // not the extractor's default 422.
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    assert_eq!(common::count_students(&pool).await, 0);
}

// ─── RETRIEVE ────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_retrieve_student_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.get("/students/999").await;

    response.assert_status_not_found();
}

// ─── REPLACE ─────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_replace_student_success(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let id = common::create_test_student(&pool, "Linh", 20).await;

    let response = server
        .put(&format!("/students/{id}"))
        .json(&json!({ "name": "Linh Nguyen", "age": 21 }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Linh Nguyen");
    assert_eq!(body["age"], 21);
}

#[sqlx::test]
async fn test_replace_student_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .put("/students/999")
        .json(&json!({ "name": "Nobody", "age": 30 }))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_replace_student_wrong_typed_body(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let id = common::create_test_student(&pool, "Linh", 20).await;

    let response = server
        .put(&format!("/students/{id}"))
        .json(&json!({ "name": "Linh", "age": "twenty" }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");

    let stored = server
        .get(&format!("/students/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stored["age"], 20);
}

#[sqlx::test]
async fn test_replace_student_invalid_body_leaves_record_unchanged(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let id = common::create_test_student(&pool, "Linh", 20).await;

    let response = server
        .put(&format!("/students/{id}"))
        .json(&json!({ "age": 21 }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let stored = server
        .get(&format!("/students/{id}"))
        .await
        .json::<serde_json::Value>();
    assert_eq!(stored["name"], "Linh");
    assert_eq!(stored["age"], 20);
}

// ─── REMOVE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_student_success(pool: SqlitePool) {
    let server = make_server(pool.clone());

    let id = common::create_test_student(&pool, "Linh", 20).await;

    let response = server.delete(&format!("/students/{id}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(common::count_students(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_student_not_found(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server.delete("/students/999").await;

    response.assert_status_not_found();
}

// ─── FULL LIFECYCLE ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_student_lifecycle(pool: SqlitePool) {
    let server = make_server(pool);

    let response = server
        .post("/students")
        .json(&json!({ "name": "Linh", "age": 20 }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.assert_json(&json!({ "id": 1, "name": "Linh", "age": 20 }));

    let response = server.get("/students/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "id": 1, "name": "Linh", "age": 20 }));

    server
        .delete("/students/1")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server.get("/students/1").await.assert_status_not_found();
}
