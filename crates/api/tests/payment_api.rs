mod common;

use common::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use sqlx::PgPool;

fn money(value: &Value) -> Decimal {
    value.as_str().unwrap().parse().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_payment(pool: PgPool) {
    let app = build_test_app(pool);

    let invoice_id = seed_invoice_chain(&app, "payer@example.com", "100.00").await;

    let response = post_json(
        app,
        "/api/v1/payments",
        json!({
            "invoice_id": invoice_id,
            "amount": "25.00",
            "method": "bank_transfer"
        }),
    )
    .await;
    assert_eq!(response.status(), 201);

    let body = body_json(response).await;
    let payment = &body["data"];
    assert_eq!(payment["invoice_id"].as_i64().unwrap(), invoice_id);
    assert_eq!(money(&payment["amount"]), "25.00".parse::<Decimal>().unwrap());
    assert_eq!(payment["method"], "bank_transfer");
    // paid_at defaults to now when not provided.
    assert!(payment["paid_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_payment_zero_amount(pool: PgPool) {
    let app = build_test_app(pool);

    let invoice_id = seed_invoice_chain(&app, "zero@example.com", "100.00").await;

    let response = post_json(
        app,
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": "0.00" }),
    )
    .await;
    assert_eq!(response.status(), 422);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_payment_unknown_invoice(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/payments",
        json!({ "invoice_id": 999999, "amount": "10.00" }),
    )
    .await;
    assert_eq!(response.status(), 422);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_payment_overpayment_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let invoice_id = seed_invoice_chain(&app, "over@example.com", "100.00").await;
    seed_payment(&app, invoice_id, "60.00").await;

    // 60 + 50 exceeds the invoice amount of 100.
    let response = post_json(
        app,
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": "50.00" }),
    )
    .await;
    assert_eq!(response.status(), 422);

    let body = body_json(response).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_payment_exact_payoff_allowed(pool: PgPool) {
    let app = build_test_app(pool);

    let invoice_id = seed_invoice_chain(&app, "exact@example.com", "100.00").await;
    seed_payment(&app, invoice_id, "60.00").await;

    // 60 + 40 settles the invoice exactly.
    let response = post_json(
        app,
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": "40.00" }),
    )
    .await;
    assert_eq!(response.status(), 201);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_payments_filtered_by_invoice(pool: PgPool) {
    let app = build_test_app(pool);

    let first = seed_invoice_chain(&app, "lista@example.com", "100.00").await;
    let second = seed_invoice_chain(&app, "listb@example.com", "100.00").await;
    seed_payment(&app, first, "10.00").await;
    seed_payment(&app, first, "20.00").await;
    seed_payment(&app, second, "30.00").await;

    let response = get(app.clone(), &format!("/api/v1/payments?invoice_id={first}")).await;
    assert_eq!(response.status(), 200);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/payments").await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_payment_not_found(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/v1/payments/999999").await;
    assert_eq!(response.status(), 404);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_payment_frees_balance(pool: PgPool) {
    let app = build_test_app(pool);

    let invoice_id = seed_invoice_chain(&app, "redo@example.com", "100.00").await;
    let payment_id = seed_payment(&app, invoice_id, "100.00").await;

    // Invoice is fully paid, so any further payment is rejected.
    let response = post_json(
        app.clone(),
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": "1.00" }),
    )
    .await;
    assert_eq!(response.status(), 422);

    // Deleting the wrong payment frees the balance again.
    let response = delete(app.clone(), &format!("/api/v1/payments/{payment_id}")).await;
    assert_eq!(response.status(), 204);

    let response = post_json(
        app,
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": "1.00" }),
    )
    .await;
    assert_eq!(response.status(), 201);
}
