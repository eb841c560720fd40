//! Read-only aggregate queries for the reporting endpoint.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::report::ReportRow;

/// Provides the joined invoice/payment aggregation behind
/// `/reports/invoices`. Purely read-only.
pub struct ReportRepo;

impl ReportRepo {
    /// One row per invoice with its client, package, and summed
    /// payments. The client is reached through the owning shoot.
    /// Date bounds on `issued_date` are inclusive.
    pub async fn invoice_rows(
        pool: &PgPool,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<ReportRow>, sqlx::Error> {
        let query = "\
            SELECT i.id AS invoice_id, \
                   i.issued_date, \
                   i.due_date, \
                   c.name AS client_name, \
                   p.name AS package_name, \
                   i.amount, \
                   COALESCE(SUM(pay.amount), 0)::numeric(10, 2) AS total_paid, \
                   i.status \
            FROM invoices i \
            JOIN shoots s ON s.id = i.shoot_id \
            JOIN clients c ON c.id = s.client_id \
            JOIN packages p ON p.id = i.package_id \
            LEFT JOIN payments pay ON pay.invoice_id = i.id \
            WHERE ($1::date IS NULL OR i.issued_date >= $1) \
              AND ($2::date IS NULL OR i.issued_date <= $2) \
            GROUP BY i.id, i.issued_date, i.due_date, c.name, p.name, i.amount, i.status \
            ORDER BY i.issued_date DESC, i.id DESC";
        sqlx::query_as::<_, ReportRow>(query)
            .bind(date_from)
            .bind(date_to)
            .fetch_all(pool)
            .await
    }
}
