//! Handlers for the `/invoices` resource.
//!
//! Invoices tie a shoot to a package. Status is validated against the
//! {draft, paid, overdue} enumeration but carries no transition graph:
//! any member may be set at any time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use chrono::NaiveDate;
use serde::Deserialize;

use photodesk_core::billing;
use photodesk_core::error::CoreError;
use photodesk_core::types::DbId;
use photodesk_db::models::invoice::{CreateInvoice, Invoice, InvoiceSummary, UpdateInvoice};
use photodesk_db::repositories::invoice_repo::InvoiceFilter;
use photodesk_db::repositories::{InvoiceRepo, PackageRepo, PaymentRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::query;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing invoices.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub shoot_id: Option<DbId>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that an invoice exists, returning the full row.
async fn ensure_invoice_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Invoice> {
    InvoiceRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        })
    })
}

/// Reject a shoot_id that does not resolve to an existing shoot.
async fn ensure_shoot_resolves(pool: &sqlx::PgPool, shoot_id: DbId) -> AppResult<()> {
    if !ShootRepo::exists(pool, shoot_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "shoot_id {shoot_id} does not reference an existing shoot"
        ))));
    }
    Ok(())
}

/// Reject a package_id that does not resolve to an existing package.
async fn ensure_package_resolves(pool: &sqlx::PgPool, package_id: DbId) -> AppResult<()> {
    if !PackageRepo::exists(pool, package_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "package_id {package_id} does not reference an existing package"
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /invoices
// ---------------------------------------------------------------------------

/// List invoices, most recently issued first. Supports filtering by
/// shoot, status, and an inclusive issued-date window.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        billing::validate_status(status)?;
    }

    let (limit, offset) = query::page(params.limit, params.offset);
    let filter = InvoiceFilter {
        shoot_id: params.shoot_id,
        status: params.status,
        date_from: params.date_from,
        date_to: params.date_to,
    };
    let items = InvoiceRepo::list(&state.pool, &filter, limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed invoices");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /invoices
// ---------------------------------------------------------------------------

/// Create a new invoice. The shoot and package must both exist, the
/// amount must not be negative, and the status (when given) must be a
/// member of the enumeration.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInvoice>,
) -> AppResult<impl IntoResponse> {
    billing::validate_amount(input.amount)?;
    if let Some(ref status) = input.status {
        billing::validate_status(status)?;
    }
    ensure_shoot_resolves(&state.pool, input.shoot_id).await?;
    ensure_package_resolves(&state.pool, input.package_id).await?;

    let created = InvoiceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        shoot_id = created.shoot_id,
        status = %created.status,
        "Invoice created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /invoices/{id}
// ---------------------------------------------------------------------------

/// Get a single invoice by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let inv = ensure_invoice_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: inv }))
}

// ---------------------------------------------------------------------------
// PUT /invoices/{id}
// ---------------------------------------------------------------------------

/// Update an existing invoice. Foreign keys are re-checked when they
/// change; any valid status may replace any other.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInvoice>,
) -> AppResult<impl IntoResponse> {
    ensure_invoice_exists(&state.pool, id).await?;

    if let Some(amount) = input.amount {
        billing::validate_amount(amount)?;
    }
    if let Some(ref status) = input.status {
        billing::validate_status(status)?;
    }
    if let Some(shoot_id) = input.shoot_id {
        ensure_shoot_resolves(&state.pool, shoot_id).await?;
    }
    if let Some(package_id) = input.package_id {
        ensure_package_resolves(&state.pool, package_id).await?;
    }

    let updated = InvoiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))?;
    tracing::info!(id = updated.id, status = %updated.status, "Invoice updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /invoices/{id}
// ---------------------------------------------------------------------------

/// Delete an invoice by ID. Blocked with 409 while payments exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = InvoiceRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Invoice deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Invoice",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// GET /invoices/{id}/summary
// ---------------------------------------------------------------------------

/// Totals and remaining balance for one invoice. An invoice with no
/// payments has a balance equal to its amount.
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let inv = ensure_invoice_exists(&state.pool, id).await?;
    let total_paid = PaymentRepo::sum_for_invoice(&state.pool, id).await?;

    let summary = InvoiceSummary {
        invoice_id: inv.id,
        amount: inv.amount,
        total_paid,
        balance: billing::balance(inv.amount, total_paid),
        payment_status: billing::payment_status(inv.amount, total_paid),
    };
    Ok(Json(DataResponse { data: summary }))
}
