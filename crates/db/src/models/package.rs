//! Package models and DTOs.

use photodesk_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Package {
    pub id: DbId,
    pub name: String,
    pub price: Money,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new package. `is_active` defaults to true.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePackage {
    pub name: String,
    pub price: Money,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for updating an existing package. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePackage {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
