pub mod director;
pub mod genre;
pub mod movie;

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies/                      list (?genre_id&director_id), create
/// /movies/{id}                  get, update, delete
///
/// /director/                    list
/// /director/{name}              create (POST)
/// /movies/directors/{id}        list movies, update, delete
///
/// /genre/                       list
/// /genre/{name}                 create (POST)
/// /movies/genres/{id}           list movies, update, delete
///
/// /health                       database and schema readiness
/// ```
///
/// Collection paths also answer without the trailing slash.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(movie::router())
        .merge(director::router())
        .merge(genre::router())
        .route("/health", get(health::check))
}
