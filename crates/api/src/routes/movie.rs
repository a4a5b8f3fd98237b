//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// ```text
/// GET    /movies/        -> list
/// POST   /movies/        -> create
/// GET    /movies/{id}    -> get_by_id
/// PUT    /movies/{id}    -> update
/// DELETE /movies/{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let collection = get(movie::list).post(movie::create);

    Router::new()
        .route("/movies/", collection.clone())
        .route("/movies", collection)
        .route(
            "/movies/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
