//! Movie entity model, its external view, and DTOs.

use moviedb_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A raw row from the `movie` table, foreign keys included.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// The external representation of a movie.
///
/// `genre` and `director` carry the related row's `name` in place of the
/// foreign key; both are `null` when the reference is unset.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieView {
    pub id: DbId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre: Option<String>,
    pub director: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for inserting a movie. Any subset of fields may be supplied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for a partial movie update.
///
/// The outer `Option` records whether the key was present in the payload;
/// the inner one is the new value, so `{"genre_id": null}` clears the genre
/// while omitting `genre_id` keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMovie {
    #[serde(default, deserialize_with = "super::present")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::present")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::present")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "super::present")]
    pub genre_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "super::present")]
    pub director_id: Option<Option<DbId>>,
}

/// Query parameters for `GET /movies/`.
///
/// The filter applies only when both ids are given. An empty value
/// (`?genre_id=`) counts as not given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListParams {
    #[serde(default, deserialize_with = "super::blank_as_none")]
    pub genre_id: Option<DbId>,
    #[serde(default, deserialize_with = "super::blank_as_none")]
    pub director_id: Option<DbId>,
}

impl MovieListParams {
    /// `(genre_id, director_id)` when both are present.
    pub fn both(&self) -> Option<(DbId, DbId)> {
        self.genre_id.zip(self.director_id)
    }
}
