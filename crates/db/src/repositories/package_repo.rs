//! Repository for the `packages` table.

use photodesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::package::{CreatePackage, Package, UpdatePackage};

const COLUMNS: &str = "id, name, price, description, is_active, created_at, updated_at";

/// Provides CRUD operations for packages.
pub struct PackageRepo;

impl PackageRepo {
    /// Insert a new package, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePackage) -> Result<Package, sqlx::Error> {
        let query = format!(
            "INSERT INTO packages (name, price, description, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a package by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Package>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM packages WHERE id = $1");
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List packages, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Package>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM packages \
             ORDER BY id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a package. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePackage,
    ) -> Result<Option<Package>, sqlx::Error> {
        let query = format!(
            "UPDATE packages SET \
                name = COALESCE($2, name), \
                price = COALESCE($3, price), \
                description = COALESCE($4, description), \
                is_active = COALESCE($5, is_active), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Package>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a package by ID. Returns `true` if a row was removed.
    /// Fails with a foreign-key violation while invoices reference it;
    /// deactivate instead when history must be kept.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM packages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a package with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM packages WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
