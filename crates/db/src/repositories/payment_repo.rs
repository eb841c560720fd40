//! Repository for the `payments` table.

use photodesk_core::types::{DbId, Money};
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

const COLUMNS: &str = "id, invoice_id, amount, method, paid_at, created_at";

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row. The caller is
    /// responsible for the invoice-exists and overpayment checks.
    pub async fn create(pool: &PgPool, input: &CreatePayment) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (invoice_id, amount, method, paid_at) \
             VALUES ($1, $2, $3, COALESCE($4, now())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(input.invoice_id)
            .bind(input.amount)
            .bind(&input.method)
            .bind(input.paid_at)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List payments, newest first, optionally scoped to one invoice.
    pub async fn list(
        pool: &PgPool,
        invoice_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments \
             WHERE ($1::bigint IS NULL OR invoice_id = $1) \
             ORDER BY id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(invoice_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sum of all payments applied to an invoice. Zero when none exist.
    pub async fn sum_for_invoice(pool: &PgPool, invoice_id: DbId) -> Result<Money, sqlx::Error> {
        let row: (Money,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0)::numeric(10, 2) \
             FROM payments WHERE invoice_id = $1",
        )
        .bind(invoice_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
