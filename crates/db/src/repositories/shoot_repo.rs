//! Repository for the `shoots` table.

use photodesk_core::types::DbId;
use sqlx::PgPool;

use crate::models::shoot::{CreateShoot, Shoot, UpdateShoot};

const COLUMNS: &str = "id, client_id, shoot_date, location, shoot_type, created_at, updated_at";

/// Provides CRUD operations for shoots.
pub struct ShootRepo;

impl ShootRepo {
    /// Insert a new shoot, returning the created row. The caller is
    /// responsible for verifying the client exists first.
    pub async fn create(pool: &PgPool, input: &CreateShoot) -> Result<Shoot, sqlx::Error> {
        let query = format!(
            "INSERT INTO shoots (client_id, shoot_date, location, shoot_type) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(input.client_id)
            .bind(input.shoot_date)
            .bind(&input.location)
            .bind(&input.shoot_type)
            .fetch_one(pool)
            .await
    }

    /// Find a shoot by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shoots WHERE id = $1");
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List shoots, newest date first, optionally scoped to one client.
    pub async fn list(
        pool: &PgPool,
        client_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Shoot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM shoots \
             WHERE ($1::bigint IS NULL OR client_id = $1) \
             ORDER BY shoot_date DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(client_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a shoot. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShoot,
    ) -> Result<Option<Shoot>, sqlx::Error> {
        let query = format!(
            "UPDATE shoots SET \
                shoot_date = COALESCE($2, shoot_date), \
                location = COALESCE($3, location), \
                shoot_type = COALESCE($4, shoot_type), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shoot>(&query)
            .bind(id)
            .bind(input.shoot_date)
            .bind(&input.location)
            .bind(&input.shoot_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shoot by ID. Returns `true` if a row was removed.
    /// Fails with a foreign-key violation while dependent invoices exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shoots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Check whether a shoot with this ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM shoots WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
