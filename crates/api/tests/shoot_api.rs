mod common;

use common::*;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_shoot(pool: PgPool) {
    let app = build_test_app(pool);

    let client_id = seed_client(&app, "shooter@example.com").await;

    let response = post_json(
        app,
        "/api/v1/shoots",
        json!({
            "client_id": client_id,
            "shoot_date": "2026-09-01",
            "location": "Riverside Park",
            "shoot_type": "wedding"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let body = body_json(response).await;
    let shoot = &body["data"];
    assert_eq!(shoot["client_id"].as_i64().unwrap(), client_id);
    assert_eq!(shoot["shoot_date"], "2026-09-01");
    assert_eq!(shoot["location"], "Riverside Park");
    assert_eq!(shoot["shoot_type"], "wedding");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_shoot_unknown_client(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/shoots",
        json!({ "client_id": 999999, "shoot_date": "2026-09-01" }),
    )
    .await;
    assert_eq!(response.status(), 422);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_shoots_filtered_by_client(pool: PgPool) {
    let app = build_test_app(pool);

    let first = seed_client(&app, "first@example.com").await;
    let second = seed_client(&app, "second@example.com").await;
    seed_shoot(&app, first).await;
    seed_shoot(&app, first).await;
    seed_shoot(&app, second).await;

    let response = get(app.clone(), &format!("/api/v1/shoots?client_id={first}")).await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/shoots").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_shoot_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/shoots/999999").await;
    assert_eq!(response.status(), 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_shoot_partial(pool: PgPool) {
    let app = build_test_app(pool);

    let client_id = seed_client(&app, "update@example.com").await;
    let shoot_id = seed_shoot(&app, client_id).await;

    let response = put_json(
        app,
        &format!("/api/v1/shoots/{shoot_id}"),
        json!({ "location": "New Location" }),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["data"]["location"], "New Location");
    // Fields not sent keep their values.
    assert_eq!(body["data"]["shoot_date"], "2026-06-15");
    assert_eq!(body["data"]["client_id"].as_i64().unwrap(), client_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_shoot(pool: PgPool) {
    let app = build_test_app(pool);

    let client_id = seed_client(&app, "del@example.com").await;
    let shoot_id = seed_shoot(&app, client_id).await;

    let response = delete(app.clone(), &format!("/api/v1/shoots/{shoot_id}")).await;
    assert_eq!(response.status(), 204);

    let response = get(app, &format!("/api/v1/shoots/{shoot_id}")).await;
    assert_eq!(response.status(), 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_shoot_with_invoice_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    let client_id = seed_client(&app, "billed@example.com").await;
    let shoot_id = seed_shoot(&app, client_id).await;
    let package_id = seed_package(&app, "250.00").await;
    seed_invoice(&app, shoot_id, package_id, "250.00").await;

    let response = delete(app, &format!("/api/v1/shoots/{shoot_id}")).await;
    assert_eq!(response.status(), 409);
}
