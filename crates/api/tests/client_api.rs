mod common;

use common::*;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({
            "name": "Ada Wexler",
            "email": "ada@example.com",
            "phone": "+44 20 7946 0000"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let body = body_json(response).await;
    let client = &body["data"];
    assert!(client["id"].as_i64().unwrap() > 0);
    assert_eq!(client["name"], "Ada Wexler");
    assert_eq!(client["email"], "ada@example.com");
    assert_eq!(client["phone"], "+44 20 7946 0000");
    assert!(client["created_at"].is_string());
    assert!(client["updated_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_phone_optional(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "No Phone", "email": "nophone@example.com" }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let body = body_json(response).await;
    assert!(body["data"]["phone"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_invalid_email(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "Bad Email", "email": "not-an-email" }),
    )
    .await;
    assert_eq!(response.status(), 422);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_empty_name(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "   ", "email": "blank@example.com" }),
    )
    .await;
    assert_eq!(response.status(), 422);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_duplicate_email_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    seed_client(&app, "dup@example.com").await;

    let response = post_json(
        app,
        "/api/v1/clients",
        json!({ "name": "Second", "email": "dup@example.com" }),
    )
    .await;
    assert_eq!(response.status(), 409);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_client_by_id(pool: PgPool) {
    let app = build_test_app(pool);

    let id = seed_client(&app, "fetch@example.com").await;

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["data"]["id"].as_i64().unwrap(), id);
    assert_eq!(body["data"]["email"], "fetch@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_client_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/clients/999999").await;
    assert_eq!(response.status(), 404);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_clients_with_pagination(pool: PgPool) {
    let app = build_test_app(pool);

    for i in 0..3 {
        seed_client(&app, &format!("page{i}@example.com")).await;
    }

    let response = get(app.clone(), "/api/v1/clients?limit=2").await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/clients?limit=2&offset=2").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_partial(pool: PgPool) {
    let app = build_test_app(pool);

    let id = seed_client(&app, "partial@example.com").await;

    // Only the phone is sent; name and email must be unchanged.
    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        json!({ "phone": "555-0100" }),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Test Client");
    assert_eq!(body["data"]["email"], "partial@example.com");
    assert_eq!(body["data"]["phone"], "555-0100");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_email_taken_by_other(pool: PgPool) {
    let app = build_test_app(pool);

    seed_client(&app, "taken@example.com").await;
    let id = seed_client(&app, "mover@example.com").await;

    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        json!({ "email": "taken@example.com" }),
    )
    .await;
    assert_eq!(response.status(), 409);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_own_email_is_allowed(pool: PgPool) {
    let app = build_test_app(pool);

    let id = seed_client(&app, "same@example.com").await;

    // Re-submitting the client's own email is not a conflict.
    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        json!({ "email": "same@example.com", "name": "Renamed" }),
    )
    .await;
    assert_eq!(response.status(), 200);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Renamed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/clients/999999",
        json!({ "name": "Ghost" }),
    )
    .await;
    assert_eq!(response.status(), 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_client(pool: PgPool) {
    let app = build_test_app(pool);

    let id = seed_client(&app, "gone@example.com").await;

    let response = delete(app.clone(), &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), 204);

    let response = get(app, &format!("/api/v1/clients/{id}")).await;
    assert_eq!(response.status(), 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_client_with_shoots_conflict(pool: PgPool) {
    let app = build_test_app(pool);

    let client_id = seed_client(&app, "busy@example.com").await;
    seed_shoot(&app, client_id).await;

    let response = delete(app, &format!("/api/v1/clients/{client_id}")).await;
    assert_eq!(response.status(), 409);

    let body = body_json(response).await;
    assert_eq!(body["code"], "CONFLICT");
}
