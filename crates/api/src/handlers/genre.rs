//! Handlers for genres. Same shape as directors.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::OptionExt;
use moviedb_core::naming::normalize_name;
use moviedb_core::types::DbId;
use moviedb_db::models::genre::{CreateGenre, Genre, UpdateGenre};
use moviedb_db::models::movie::MovieView;
use moviedb_db::repositories::{GenreRepo, MovieRepo};

use crate::error::AppResult;
use crate::extract::{Json as JsonBody, Path};
use crate::state::AppState;

/// POST /genre/{name}
pub async fn create(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    let input = CreateGenre {
        name: normalize_name(&name)?,
    };
    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.id, name = %genre.name, "Genre created");
    Ok(StatusCode::CREATED)
}

/// GET /genre/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(genres))
}

/// GET /movies/genres/{id}
pub async fn list_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = MovieRepo::list_by_genre(&state.pool, id).await?;
    Ok(Json(movies))
}

/// PUT /movies/genres/{id}
///
/// Answers 204 like the other update endpoints.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateGenre>,
) -> AppResult<StatusCode> {
    let input = UpdateGenre {
        name: input.name.as_deref().map(normalize_name).transpose()?,
    };
    GenreRepo::update(&state.pool, id, &input)
        .await?
        .or_not_found("Genre", id)?;
    tracing::info!(genre_id = id, "Genre updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/genres/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    GenreRepo::delete(&state.pool, id)
        .await?
        .then_some(())
        .or_not_found("Genre", id)?;
    tracing::info!(genre_id = id, "Genre deleted");
    Ok(StatusCode::NO_CONTENT)
}
