//! Handlers for the `/payments` resource.
//!
//! Recording a payment checks the invoice exists, the amount is
//! positive, and the cumulative total stays within the invoice amount.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use photodesk_core::billing;
use photodesk_core::error::CoreError;
use photodesk_core::types::DbId;
use photodesk_db::models::payment::{CreatePayment, Payment};
use photodesk_db::repositories::{InvoiceRepo, PaymentRepo};

use crate::error::{AppError, AppResult};
use crate::query;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing payments.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub invoice_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a payment exists, returning the full row.
async fn ensure_payment_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Payment> {
    PaymentRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /payments
// ---------------------------------------------------------------------------

/// List payments, newest first, optionally filtered by invoice.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = query::page(params.limit, params.offset);
    let items = PaymentRepo::list(&state.pool, params.invoice_id, limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed payments");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /payments
// ---------------------------------------------------------------------------

/// Record a payment against an invoice.
///
/// Steps: confirm the invoice exists, sum its existing payments, and
/// reject the new payment if the total would exceed the invoice amount.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<impl IntoResponse> {
    billing::validate_payment_amount(input.amount)?;

    let invoice = InvoiceRepo::find_by_id(&state.pool, input.invoice_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "invoice_id {} does not reference an existing invoice",
                input.invoice_id
            )))
        })?;

    let total_paid = PaymentRepo::sum_for_invoice(&state.pool, invoice.id).await?;
    billing::check_overpayment(invoice.amount, total_paid, input.amount)?;

    let created = PaymentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        invoice_id = created.invoice_id,
        amount = %created.amount,
        "Payment recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /payments/{id}
// ---------------------------------------------------------------------------

/// Get a single payment by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let p = ensure_payment_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: p }))
}

// ---------------------------------------------------------------------------
// DELETE /payments/{id}
// ---------------------------------------------------------------------------

/// Delete a payment by ID. Useful when an amount was entered wrongly.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PaymentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Payment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id,
        }))
    }
}
