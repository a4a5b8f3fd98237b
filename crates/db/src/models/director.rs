//! Director entity model and DTOs.

use moviedb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `director` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a director. Built from the request path, not a body.
#[derive(Debug, Clone)]
pub struct CreateDirector {
    pub name: String,
}

/// DTO for renaming a director. An absent `name` leaves the row as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDirector {
    pub name: Option<String>,
}
