//! Invoice report rows.

use chrono::NaiveDate;
use photodesk_core::types::{DbId, Money};
use serde::Serialize;
use sqlx::FromRow;

/// Raw aggregate row from the invoice report query: one invoice joined
/// to its client and package, with the summed payments. Balance and
/// payment status are derived afterwards in `photodesk_core::billing`.
#[derive(Debug, Clone, FromRow)]
pub struct ReportRow {
    pub invoice_id: DbId,
    pub issued_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub client_name: String,
    pub package_name: String,
    pub amount: Money,
    pub total_paid: Money,
    pub status: String,
}

/// A fully computed row of the invoice report response.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceReportRow {
    pub invoice_id: DbId,
    pub issued_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub client_name: String,
    pub package_name: String,
    pub amount: Money,
    pub total_paid: Money,
    pub balance: Money,
    pub status: String,
    pub payment_status: &'static str,
}
