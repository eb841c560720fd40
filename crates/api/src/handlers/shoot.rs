//! Handlers for the `/shoots` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use photodesk_core::error::CoreError;
use photodesk_core::types::DbId;
use photodesk_db::models::shoot::{CreateShoot, Shoot, UpdateShoot};
use photodesk_db::repositories::{ClientRepo, ShootRepo};

use crate::error::{AppError, AppResult};
use crate::query;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing shoots.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub client_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a shoot exists, returning the full row.
async fn ensure_shoot_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Shoot> {
    ShootRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Shoot", id }))
}

/// Reject a client_id that does not resolve to an existing client.
async fn ensure_client_resolves(pool: &sqlx::PgPool, client_id: DbId) -> AppResult<()> {
    if !ClientRepo::exists(pool, client_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "client_id {client_id} does not reference an existing client"
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /shoots
// ---------------------------------------------------------------------------

/// List shoots, newest date first, optionally filtered by client.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = query::page(params.limit, params.offset);
    let items = ShootRepo::list(&state.pool, params.client_id, limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed shoots");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /shoots
// ---------------------------------------------------------------------------

/// Create a shoot for a client. The client must exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShoot>,
) -> AppResult<impl IntoResponse> {
    ensure_client_resolves(&state.pool, input.client_id).await?;

    let created = ShootRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, client_id = created.client_id, "Shoot created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /shoots/{id}
// ---------------------------------------------------------------------------

/// Get a single shoot by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let s = ensure_shoot_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: s }))
}

// ---------------------------------------------------------------------------
// PUT /shoots/{id}
// ---------------------------------------------------------------------------

/// Update an existing shoot. Only provided fields are changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateShoot>,
) -> AppResult<impl IntoResponse> {
    ensure_shoot_exists(&state.pool, id).await?;

    let updated = ShootRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))?;
    tracing::info!(id = updated.id, "Shoot updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /shoots/{id}
// ---------------------------------------------------------------------------

/// Delete a shoot by ID. Blocked with 409 while dependent invoices exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ShootRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Shoot deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Shoot", id }))
    }
}
