//! Route definitions for genres.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::genre;
use crate::state::AppState;

/// ```text
/// GET    /genre/               -> list
/// POST   /genre/{name}         -> create
/// GET    /movies/genres/{id}   -> list_movies
/// PUT    /movies/genres/{id}   -> update
/// DELETE /movies/genres/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genre/", get(genre::list))
        .route("/genre", get(genre::list))
        .route("/genre/{name}", post(genre::create))
        .route(
            "/movies/genres/{id}",
            get(genre::list_movies)
                .put(genre::update)
                .delete(genre::delete),
        )
}
