//! Invoice models and DTOs.

use chrono::NaiveDate;
use photodesk_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `invoices` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Invoice {
    pub id: DbId,
    pub shoot_id: DbId,
    pub package_id: DbId,
    pub amount: Money,
    pub status: String,
    pub issued_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new invoice. `status` defaults to `draft` and
/// `issued_date` to the current date when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoice {
    pub shoot_id: DbId,
    pub package_id: DbId,
    pub amount: Money,
    pub status: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// DTO for updating an existing invoice. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoice {
    pub shoot_id: Option<DbId>,
    pub package_id: Option<DbId>,
    pub amount: Option<Money>,
    pub status: Option<String>,
    pub issued_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

/// Totals and remaining balance for one invoice, computed on read.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceSummary {
    pub invoice_id: DbId,
    pub amount: Money,
    pub total_paid: Money,
    pub balance: Money,
    pub payment_status: &'static str,
}
