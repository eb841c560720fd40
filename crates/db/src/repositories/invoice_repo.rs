//! Repository for the `invoices` table.

use chrono::NaiveDate;
use photodesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::invoice::{CreateInvoice, Invoice, UpdateInvoice};

const COLUMNS: &str = "id, shoot_id, package_id, amount, status, issued_date, due_date, \
     created_at, updated_at";

/// Optional filters for listing invoices. Date bounds apply to
/// `issued_date` and are inclusive.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub shoot_id: Option<DbId>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Provides CRUD operations for invoices.
pub struct InvoiceRepo;

impl InvoiceRepo {
    /// Insert a new invoice, returning the created row. The caller is
    /// responsible for verifying the shoot and package exist first.
    pub async fn create(pool: &PgPool, input: &CreateInvoice) -> Result<Invoice, sqlx::Error> {
        let query = format!(
            "INSERT INTO invoices \
                (shoot_id, package_id, amount, status, issued_date, due_date) \
             VALUES ($1, $2, $3, COALESCE($4, 'draft'), COALESCE($5, CURRENT_DATE), $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(input.shoot_id)
            .bind(input.package_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.issued_date)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find an invoice by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM invoices WHERE id = $1");
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List invoices, most recently issued first, applying any filters.
    pub async fn list(
        pool: &PgPool,
        filter: &InvoiceFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Invoice>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM invoices \
             WHERE ($1::bigint IS NULL OR shoot_id = $1) \
               AND ($2::text IS NULL OR status = $2) \
               AND ($3::date IS NULL OR issued_date >= $3) \
               AND ($4::date IS NULL OR issued_date <= $4) \
             ORDER BY issued_date DESC, id DESC \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(filter.shoot_id)
            .bind(&filter.status)
            .bind(filter.date_from)
            .bind(filter.date_to)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update an invoice. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, sqlx::Error> {
        let query = format!(
            "UPDATE invoices SET \
                shoot_id = COALESCE($2, shoot_id), \
                package_id = COALESCE($3, package_id), \
                amount = COALESCE($4, amount), \
                status = COALESCE($5, status), \
                issued_date = COALESCE($6, issued_date), \
                due_date = COALESCE($7, due_date), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Invoice>(&query)
            .bind(id)
            .bind(input.shoot_id)
            .bind(input.package_id)
            .bind(input.amount)
            .bind(&input.status)
            .bind(input.issued_date)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete an invoice by ID. Returns `true` if a row was removed.
    /// Fails with a foreign-key violation while payments exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether an invoice with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM invoices WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
