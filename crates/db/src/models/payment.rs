//! Payment models and DTOs.

use photodesk_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub invoice_id: DbId,
    pub amount: Money,
    pub method: Option<String>,
    pub paid_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for recording a payment. `paid_at` defaults to now when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePayment {
    pub invoice_id: DbId,
    pub amount: Money,
    pub method: Option<String>,
    pub paid_at: Option<Timestamp>,
}
