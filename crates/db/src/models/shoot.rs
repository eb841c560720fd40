//! Shoot models and DTOs.

use chrono::NaiveDate;
use photodesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shoots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shoot {
    pub id: DbId,
    pub client_id: DbId,
    pub shoot_date: NaiveDate,
    pub location: Option<String>,
    pub shoot_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new shoot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShoot {
    pub client_id: DbId,
    pub shoot_date: NaiveDate,
    pub location: Option<String>,
    pub shoot_type: Option<String>,
}

/// DTO for updating an existing shoot. All fields are optional; the
/// owning client cannot be changed after creation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateShoot {
    pub shoot_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub shoot_type: Option<String>,
}
