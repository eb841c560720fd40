//! Handlers for the `/reports` resource.
//!
//! Read-only aggregation; no side effects and no ratio computations.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use chrono::NaiveDate;
use serde::Deserialize;

use photodesk_core::billing;
use photodesk_db::models::report::InvoiceReportRow;
use photodesk_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for the invoice report. Date bounds apply to
/// `issued_date` and are inclusive.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// GET /reports/invoices
// ---------------------------------------------------------------------------

/// One row per invoice with its client, package, totals, remaining
/// balance, and derived payment status. An invoice with zero payments
/// reports a balance equal to its amount.
pub async fn invoices(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<impl IntoResponse> {
    let rows = ReportRepo::invoice_rows(&state.pool, params.date_from, params.date_to).await?;

    let report: Vec<InvoiceReportRow> = rows
        .into_iter()
        .map(|r| InvoiceReportRow {
            invoice_id: r.invoice_id,
            issued_date: r.issued_date,
            due_date: r.due_date,
            client_name: r.client_name,
            package_name: r.package_name,
            amount: r.amount,
            total_paid: r.total_paid,
            balance: billing::balance(r.amount, r.total_paid),
            status: r.status,
            payment_status: billing::payment_status(r.amount, r.total_paid),
        })
        .collect();

    tracing::debug!(count = report.len(), "Invoice report generated");
    Ok(Json(DataResponse { data: report }))
}
