//! Handlers for the `/packages` resource.
//!
//! Packages are a shared reference table with no parent, so this is
//! plain CRUD plus the non-negative price rule.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use photodesk_core::billing;
use photodesk_core::error::CoreError;
use photodesk_core::types::DbId;
use photodesk_db::models::package::{CreatePackage, Package, UpdatePackage};
use photodesk_db::repositories::PackageRepo;

use crate::error::{AppError, AppResult};
use crate::query;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing packages.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a package exists, returning the full row.
async fn ensure_package_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Package> {
    PackageRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        })
    })
}

// ---------------------------------------------------------------------------
// GET /packages
// ---------------------------------------------------------------------------

/// List packages, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = query::page(params.limit, params.offset);
    let items = PackageRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed packages");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /packages
// ---------------------------------------------------------------------------

/// Create a new package. Price must not be negative.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePackage>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Package name must not be empty".to_string(),
        )));
    }
    billing::validate_amount(input.price)?;

    let created = PackageRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Package created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /packages/{id}
// ---------------------------------------------------------------------------

/// Get a single package by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let p = ensure_package_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: p }))
}

// ---------------------------------------------------------------------------
// PUT /packages/{id}
// ---------------------------------------------------------------------------

/// Update an existing package. Only provided fields are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePackage>,
) -> AppResult<impl IntoResponse> {
    ensure_package_exists(&state.pool, id).await?;

    if let Some(ref name) = input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Package name must not be empty".to_string(),
            )));
        }
    }
    if let Some(price) = input.price {
        billing::validate_amount(price)?;
    }

    let updated = PackageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))?;
    tracing::info!(id = updated.id, "Package updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /packages/{id}
// ---------------------------------------------------------------------------

/// Delete a package by ID. Blocked with 409 while invoices reference it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PackageRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Package deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Package",
            id,
        }))
    }
}
