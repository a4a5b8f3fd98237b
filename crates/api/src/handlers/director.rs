//! Handlers for directors: creation by name at `/director/{name}` and the
//! per-director resource at `/movies/directors/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use moviedb_core::error::OptionExt;
use moviedb_core::naming::normalize_name;
use moviedb_core::types::DbId;
use moviedb_db::models::director::{CreateDirector, Director, UpdateDirector};
use moviedb_db::models::movie::MovieView;
use moviedb_db::repositories::{DirectorRepo, MovieRepo};

use crate::error::AppResult;
use crate::extract::{Json as JsonBody, Path};
use crate::state::AppState;

/// POST /director/{name}
///
/// The path segment is the whole payload: a director with that name.
pub async fn create(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    let input = CreateDirector {
        name: normalize_name(&name)?,
    };
    let director = DirectorRepo::create(&state.pool, &input).await?;
    tracing::info!(director_id = director.id, name = %director.name, "Director created");
    Ok(StatusCode::CREATED)
}

/// GET /director/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /movies/directors/{id}
///
/// Movies by this director; an empty array when there are none.
pub async fn list_movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = MovieRepo::list_by_director(&state.pool, id).await?;
    Ok(Json(movies))
}

/// PUT /movies/directors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateDirector>,
) -> AppResult<StatusCode> {
    let input = UpdateDirector {
        name: input.name.as_deref().map(normalize_name).transpose()?,
    };
    DirectorRepo::update(&state.pool, id, &input)
        .await?
        .or_not_found("Director", id)?;
    tracing::info!(director_id = id, "Director updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/directors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    DirectorRepo::delete(&state.pool, id)
        .await?
        .then_some(())
        .or_not_found("Director", id)?;
    tracing::info!(director_id = id, "Director deleted");
    Ok(StatusCode::NO_CONTENT)
}
