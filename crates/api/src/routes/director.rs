//! Route definitions for directors.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::director;
use crate::state::AppState;

/// ```text
/// GET    /director/               -> list
/// POST   /director/{name}         -> create
/// GET    /movies/directors/{id}   -> list_movies
/// PUT    /movies/directors/{id}   -> update
/// DELETE /movies/directors/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/director/", get(director::list))
        .route("/director", get(director::list))
        .route("/director/{name}", post(director::create))
        .route(
            "/movies/directors/{id}",
            get(director::list_movies)
                .put(director::update)
                .delete(director::delete),
        )
}
