//! HTTP-level integration tests for the `/movies` endpoints.
//!
//! Uses tower's `ServiceExt::oneshot` to send requests straight to the
//! router without a TCP listener.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, delete, get, post, post_json, put_json};
use moviedb_db::DbPool;
use serde_json::json;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a director and a genre through the API, returning their ids.
async fn seed_people_and_genres(pool: &DbPool) -> (i64, i64) {
    let app = common::build_test_app(pool.clone());
    assert_eq!(post(app, "/director/Nolan").await.status(), StatusCode::CREATED);
    let app = common::build_test_app(pool.clone());
    assert_eq!(post(app, "/genre/Sci-Fi").await.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let directors = body_json(get(app, "/director/").await).await;
    let app = common::build_test_app(pool.clone());
    let genres = body_json(get(app, "/genre/").await).await;

    (
        directors[0]["id"].as_i64().unwrap(),
        genres[0]["id"].as_i64().unwrap(),
    )
}

async fn create_movie(pool: &DbPool, body: serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/movies/", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn list_movies(pool: &DbPool, uri: &str) -> Vec<serde_json::Value> {
    let app = common::build_test_app(pool.clone());
    let response = get(app, uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await.as_array().unwrap().clone()
}

fn titles(movies: &[serde_json::Value]) -> Vec<&str> {
    movies.iter().map(|m| m["title"].as_str().unwrap()).collect()
}

// ---------------------------------------------------------------------------
// Create and read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_movie_returns_201_with_empty_body(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies/", json!({"title": "Memento"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_movie_shows_director_and_genre_names(pool: DbPool) {
    let (director_id, genre_id) = seed_people_and_genres(&pool).await;
    create_movie(
        &pool,
        json!({
            "title": "Inception",
            "description": "Dreams within dreams",
            "trailer": "https://example.com/inception",
            "year": 2010,
            "rating": 8.8,
            "director_id": director_id,
            "genre_id": genre_id,
        }),
    )
    .await;

    let id = list_movies(&pool, "/movies/").await[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Inception");
    assert_eq!(json["description"], "Dreams within dreams");
    assert_eq!(json["trailer"], "https://example.com/inception");
    assert_eq!(json["year"], 2010);
    assert_eq!(json["rating"], 8.8);
    assert_eq!(json["director"], "Nolan");
    assert_eq!(json["genre"], "Sci-Fi");
    assert!(json.get("director_id").is_none());
    assert!(json.get("genre_id").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_movie_without_references_has_null_names(pool: DbPool) {
    create_movie(&pool, json!({"title": "Untitled"})).await;

    let movies = list_movies(&pool, "/movies/").await;
    assert_eq!(movies.len(), 1);
    assert!(movies[0]["director"].is_null());
    assert!(movies[0]["genre"].is_null());
    assert!(movies[0]["year"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_ignores_client_supplied_id(pool: DbPool) {
    create_movie(&pool, json!({"id": 500, "title": "Sneaky"})).await;

    let movies = list_movies(&pool, "/movies/").await;
    assert_ne!(movies[0]["id"], 500);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_movie_returns_404(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Movie with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Listing and filtering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_filter_requires_both_parameters(pool: DbPool) {
    let (nolan, scifi) = seed_people_and_genres(&pool).await;
    let app = common::build_test_app(pool.clone());
    post(app, "/genre/Drama").await;
    let app = common::build_test_app(pool.clone());
    let genres = body_json(get(app, "/genre/").await).await;
    let drama = genres[1]["id"].as_i64().unwrap();

    create_movie(
        &pool,
        json!({"title": "Interstellar", "director_id": nolan, "genre_id": scifi}),
    )
    .await;
    create_movie(
        &pool,
        json!({"title": "Oppenheimer", "director_id": nolan, "genre_id": drama}),
    )
    .await;
    create_movie(&pool, json!({"title": "Solaris", "genre_id": scifi})).await;

    let both = list_movies(
        &pool,
        &format!("/movies/?genre_id={scifi}&director_id={nolan}"),
    )
    .await;
    assert_eq!(titles(&both), ["Interstellar"]);

    let only_genre = list_movies(&pool, &format!("/movies/?genre_id={scifi}")).await;
    assert_eq!(only_genre.len(), 3);

    let only_director = list_movies(&pool, &format!("/movies/?director_id={nolan}")).await;
    assert_eq!(only_director.len(), 3);

    let none_match = list_movies(
        &pool,
        &format!("/movies/?genre_id={drama}&director_id=424242"),
    )
    .await;
    assert!(none_match.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_without_trailing_slash(pool: DbPool) {
    create_movie(&pool, json!({"title": "Heat"})).await;

    let movies = list_movies(&pool, "/movies").await;
    assert_eq!(titles(&movies), ["Heat"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_empty_filter_value_lists_everything(pool: DbPool) {
    let (nolan, scifi) = seed_people_and_genres(&pool).await;
    create_movie(
        &pool,
        json!({"title": "Inception", "director_id": nolan, "genre_id": scifi}),
    )
    .await;
    create_movie(&pool, json!({"title": "Heat"})).await;

    let movies = list_movies(&pool, &format!("/movies/?genre_id=&director_id={nolan}")).await;
    assert_eq!(titles(&movies), ["Inception", "Heat"]);

    let movies = list_movies(&pool, "/movies/?genre_id=&director_id=").await;
    assert_eq!(movies.len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_filter_returns_400(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/?genre_id=abc&director_id=1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rating_only(pool: DbPool) {
    let (director_id, genre_id) = seed_people_and_genres(&pool).await;
    create_movie(
        &pool,
        json!({
            "title": "Tenet",
            "description": "Inversion",
            "trailer": "https://example.com/tenet",
            "year": 2020,
            "rating": 7.0,
            "director_id": director_id,
            "genre_id": genre_id,
        }),
    )
    .await;
    let before = list_movies(&pool, "/movies/").await.remove(0);
    let id = before["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/movies/{id}"), json!({"rating": 7.5})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let app = common::build_test_app(pool);
    let after = body_json(get(app, &format!("/movies/{id}")).await).await;

    assert_eq!(after["rating"], 7.5);
    for field in ["id", "title", "description", "trailer", "year", "director", "genre"] {
        assert_eq!(after[field], before[field], "field {field} changed");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_null_clears_director(pool: DbPool) {
    let (director_id, _) = seed_people_and_genres(&pool).await;
    create_movie(&pool, json!({"title": "Dunkirk", "director_id": director_id})).await;
    let id = list_movies(&pool, "/movies/").await[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/movies/{id}"), json!({"director_id": null})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let after = body_json(get(app, &format!("/movies/{id}")).await).await;
    assert!(after["director"].is_null());
    assert_eq!(after["title"], "Dunkirk");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_movie_returns_404(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/movies/31337", json!({"title": "Nobody"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_unknown_genre_returns_400(pool: DbPool) {
    create_movie(&pool, json!({"title": "Drifter"})).await;
    let id = list_movies(&pool, "/movies/").await[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/movies/{id}"), json!({"genre_id": 777})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_movie_then_get_returns_404(pool: DbPool) {
    create_movie(&pool, json!({"title": "Delete Me"})).await;
    let id = list_movies(&pool, "/movies/").await[0]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/movies/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Malformed input
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_unknown_director_returns_400(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies/", json!({"title": "Orphan", "director_id": 99})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrongly_typed_field_returns_400(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/movies/", json!({"year": "twenty ten"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_json_content_type_returns_400(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = common::send(app, Method::POST, "/movies/", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_id_returns_400(pool: DbPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/movies/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
