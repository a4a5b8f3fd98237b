//! Repository for the `movie` table.
//!
//! Reads come in two shapes: the raw [`Movie`] row, and the external
//! [`MovieView`] where the genre and director foreign keys are replaced by
//! the related rows' names through a `LEFT JOIN`.

use moviedb_core::types::DbId;

use crate::models::movie::{CreateMovie, Movie, MovieView, UpdateMovie};
use crate::DbPool;

/// Column list for raw `movie` rows.
const COLUMNS: &str = "id, title, description, trailer, year, rating, genre_id, director_id";

/// Projection shared by every `MovieView` query. Callers append a `WHERE`
/// clause and ordering.
const VIEW_SELECT: &str = "\
    SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
           g.name AS genre, d.name AS director \
    FROM movie m \
    LEFT JOIN genre g ON g.id = m.genre_id \
    LEFT JOIN director d ON d.id = m.director_id";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Reads (external view)
    // -----------------------------------------------------------------------

    /// List every movie ordered by ID.
    pub async fn list(pool: &DbPool) -> Result<Vec<MovieView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} ORDER BY m.id");
        sqlx::query_as::<_, MovieView>(&query).fetch_all(pool).await
    }

    /// List movies matching both a genre and a director.
    pub async fn list_by_genre_and_director(
        pool: &DbPool,
        genre_id: DbId,
        director_id: DbId,
    ) -> Result<Vec<MovieView>, sqlx::Error> {
        let query =
            format!("{VIEW_SELECT} WHERE m.genre_id = ?1 AND m.director_id = ?2 ORDER BY m.id");
        sqlx::query_as::<_, MovieView>(&query)
            .bind(genre_id)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// List movies by one director. Empty when nothing matches.
    pub async fn list_by_director(
        pool: &DbPool,
        director_id: DbId,
    ) -> Result<Vec<MovieView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} WHERE m.director_id = ?1 ORDER BY m.id");
        sqlx::query_as::<_, MovieView>(&query)
            .bind(director_id)
            .fetch_all(pool)
            .await
    }

    /// List movies in one genre. Empty when nothing matches.
    pub async fn list_by_genre(
        pool: &DbPool,
        genre_id: DbId,
    ) -> Result<Vec<MovieView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} WHERE m.genre_id = ?1 ORDER BY m.id");
        sqlx::query_as::<_, MovieView>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }

    /// Find a movie's external view by ID.
    pub async fn find_view_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<MovieView>, sqlx::Error> {
        let query = format!("{VIEW_SELECT} WHERE m.id = ?1");
        sqlx::query_as::<_, MovieView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Raw rows and mutations
    // -----------------------------------------------------------------------

    /// Find the raw row by ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = ?1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, trailer, year, rating, genre_id, director_id) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.trailer)
            .bind(input.year)
            .bind(input.rating)
            .bind(input.genre_id)
            .bind(input.director_id)
            .fetch_one(pool)
            .await
    }

    /// Partially update a movie.
    ///
    /// Each column is paired with a "provided" flag: only columns whose key
    /// was present in the payload are written, and a present `null` stores
    /// NULL. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET \
                 title       = CASE WHEN ?2  THEN ?3  ELSE title END, \
                 description = CASE WHEN ?4  THEN ?5  ELSE description END, \
                 trailer     = CASE WHEN ?6  THEN ?7  ELSE trailer END, \
                 year        = CASE WHEN ?8  THEN ?9  ELSE year END, \
                 rating      = CASE WHEN ?10 THEN ?11 ELSE rating END, \
                 genre_id    = CASE WHEN ?12 THEN ?13 ELSE genre_id END, \
                 director_id = CASE WHEN ?14 THEN ?15 ELSE director_id END \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(input.title.is_some())
            .bind(input.title.as_ref().and_then(|v| v.as_deref()))
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.trailer.is_some())
            .bind(input.trailer.as_ref().and_then(|v| v.as_deref()))
            .bind(input.year.is_some())
            .bind(input.year.flatten())
            .bind(input.rating.is_some())
            .bind(input.rating.flatten())
            .bind(input.genre_id.is_some())
            .bind(input.genre_id.flatten())
            .bind(input.director_id.is_some())
            .bind(input.director_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
