//! End-to-end checks against a real Postgres. Run with a reachable
//! `DATABASE_URL` and `cargo test -- --ignored`.

mod common;

use axum::{http::Method, http::StatusCode, Router};
use chrono::{DateTime, Duration, Utc};
use common::{build_test_app, send_empty, send_json};
use serde_json::{json, Value};
use sqlx::PgPool;

async fn create(app: &Router, header: &str) -> i64 {
    let (status, body) = send_json(
        app.clone(),
        Method::POST,
        "/advertisement/",
        json!({ "header": header, "description": "Barely used", "author": "kim" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body["id"].as_i64().unwrap()
}

async fn fetch(app: &Router, id: i64) -> (StatusCode, Value) {
    send_empty(app.clone(), Method::GET, &format!("/advertisement/{id}")).await
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn create_then_get_returns_the_stored_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let started = Utc::now();

    let id = create(&app, "Bike for sale").await;
    let (status, body) = fetch(&app, id).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["header"], "Bike for sale");
    assert_eq!(body["description"], "Barely used");
    assert_eq!(body["author"], "kim");

    let created_at = DateTime::parse_from_rfc3339(body["created_at"].as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc);
    assert!(created_at >= started - Duration::seconds(1));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn create_hands_out_fresh_ids(pool: PgPool) {
    let app = build_test_app(pool);

    let first = create(&app, "first").await;
    let second = create(&app, "second").await;

    assert_ne!(first, second);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn non_ascii_text_round_trips(pool: PgPool) {
    let app = build_test_app(pool);

    let id = create(&app, "Продам велосипед").await;
    let (_, body) = fetch(&app, id).await;

    assert_eq!(body["header"], "Продам велосипед");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn get_unknown_id_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = fetch(&app, 4242).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "status": "error", "reason": "Advertisement not found" })
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn patch_changes_only_the_supplied_fields(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create(&app, "Sofa").await;

    let (status, body) = send_json(
        app.clone(),
        Method::PATCH,
        &format!("/advertisement/{id}"),
        json!({ "description": "Green, three seats" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK" }));

    let (_, body) = fetch(&app, id).await;
    assert_eq!(body["header"], "Sofa");
    assert_eq!(body["description"], "Green, three seats");
    assert_eq!(body["author"], "kim");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn patch_with_empty_string_keeps_the_stored_value(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create(&app, "Lamp").await;

    let (status, _) = send_json(
        app.clone(),
        Method::PATCH,
        &format!("/advertisement/{id}"),
        json!({ "header": "", "author": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = fetch(&app, id).await;
    assert_eq!(body["header"], "Lamp");
    assert_eq!(body["author"], "kim");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn patch_unknown_id_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_json(
        app,
        Method::PATCH,
        "/advertisement/4242",
        json!({ "header": "Anything" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["reason"], "Advertisement not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn delete_then_get_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let id = create(&app, "Table").await;

    let (status, body) =
        send_empty(app.clone(), Method::DELETE, &format!("/advertisement/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK" }));

    let (status, _) = fetch(&app, id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn delete_unknown_id_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let (status, body) = send_empty(app, Method::DELETE, "/advertisement/4242").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["reason"], "Advertisement not found");
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn duplicate_header_is_a_bad_request(pool: PgPool) {
    let app = build_test_app(pool.clone());
    create(&app, "Only one").await;

    let (status, body) = send_json(
        app,
        Method::POST,
        "/advertisement/",
        json!({ "header": "Only one", "description": "Again", "author": "lee" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "Advertisement header already exists");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM advertisement WHERE header = $1")
        .bind("Only one")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires Postgres via DATABASE_URL"]
async fn patch_to_an_existing_header_is_a_bad_request(pool: PgPool) {
    let app = build_test_app(pool);
    create(&app, "Taken").await;
    let id = create(&app, "Free").await;

    let (status, body) = send_json(
        app.clone(),
        Method::PATCH,
        &format!("/advertisement/{id}"),
        json!({ "header": "Taken" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["reason"], "Advertisement header already exists");

    let (_, body) = fetch(&app, id).await;
    assert_eq!(body["header"], "Free");
}
