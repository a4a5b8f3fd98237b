//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::OptionExt;
use moviedb_core::types::DbId;
use moviedb_db::models::movie::{CreateMovie, MovieListParams, MovieView, UpdateMovie};
use moviedb_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::extract::{Json as JsonBody, Path, Query};
use crate::state::AppState;

/// GET /movies/
///
/// Lists every movie, or only those matching both `genre_id` and
/// `director_id` when the two are given together. A single parameter on
/// its own does not filter.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListParams>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = match params.both() {
        Some((genre_id, director_id)) => {
            MovieRepo::list_by_genre_and_director(&state.pool, genre_id, director_id).await?
        }
        None => MovieRepo::list(&state.pool).await?,
    };
    Ok(Json(movies))
}

/// POST /movies/
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMovie>,
) -> AppResult<StatusCode> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = ?movie.title, "Movie created");
    Ok(StatusCode::CREATED)
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieView>> {
    let movie = MovieRepo::find_view_by_id(&state.pool, id)
        .await?
        .or_not_found("Movie", id)?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Only keys present in the body are written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateMovie>,
) -> AppResult<StatusCode> {
    MovieRepo::update(&state.pool, id, &input)
        .await?
        .or_not_found("Movie", id)?;
    tracing::info!(movie_id = id, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    MovieRepo::delete(&state.pool, id)
        .await?
        .then_some(())
        .or_not_found("Movie", id)?;
    tracing::info!(movie_id = id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}
