//! Handlers for the `/clients` resource.
//!
//! Clients are the root of the ownership hierarchy. Email uniqueness is
//! checked here for a clean 409 before the database constraint would
//! catch a race anyway.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use serde::Deserialize;

use photodesk_core::contact;
use photodesk_core::error::CoreError;
use photodesk_core::types::DbId;
use photodesk_db::models::client::{Client, CreateClient, UpdateClient};
use photodesk_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::query;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing clients.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a client exists, returning the full row.
async fn ensure_client_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        })
    })
}

/// Reject an email already used by a different client.
async fn ensure_email_available(
    pool: &sqlx::PgPool,
    email: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(existing) = ClientRepo::find_by_email(pool, email).await? {
        if Some(existing.id) != exclude_id {
            return Err(AppError::Core(CoreError::Conflict(
                "A client with this email already exists".to_string(),
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /clients
// ---------------------------------------------------------------------------

/// List clients in insertion order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let (limit, offset) = query::page(params.limit, params.offset);
    let items = ClientRepo::list(&state.pool, limit, offset).await?;
    tracing::debug!(count = items.len(), "Listed clients");
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /clients
// ---------------------------------------------------------------------------

/// Create a new client.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    contact::validate_name(&input.name)?;
    contact::validate_email(&input.email)?;
    if let Some(ref phone) = input.phone {
        contact::validate_phone(phone)?;
    }
    ensure_email_available(&state.pool, &input.email, None).await?;

    let created = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, email = %created.email, "Client created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /clients/{id}
// ---------------------------------------------------------------------------

/// Get a single client by ID.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let c = ensure_client_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: c }))
}

// ---------------------------------------------------------------------------
// PUT /clients/{id}
// ---------------------------------------------------------------------------

/// Update an existing client. Only provided fields are changed; an
/// email change re-checks uniqueness against other clients.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<impl IntoResponse> {
    ensure_client_exists(&state.pool, id).await?;

    if let Some(ref name) = input.name {
        contact::validate_name(name)?;
    }
    if let Some(ref email) = input.email {
        contact::validate_email(email)?;
        ensure_email_available(&state.pool, email, Some(id)).await?;
    }
    if let Some(ref phone) = input.phone {
        contact::validate_phone(phone)?;
    }

    let updated = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    tracing::info!(id = updated.id, "Client updated");
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /clients/{id}
// ---------------------------------------------------------------------------

/// Delete a client by ID. Blocked with 409 while dependent shoots exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
