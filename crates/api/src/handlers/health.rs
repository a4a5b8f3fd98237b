//! Catalog readiness: database reachability and schema version.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Readiness report for `GET /health`.
#[derive(Debug, Serialize)]
pub struct CatalogHealth {
    /// `"ok"` when the database answers and its schema is current,
    /// `"degraded"` otherwise.
    pub status: &'static str,
    pub database: bool,
    /// Newest migration applied to the database.
    pub schema_version: Option<i64>,
    /// Newest migration embedded in this build.
    pub expected_schema_version: Option<i64>,
}

/// GET /health
///
/// Always 200; the body carries the verdict.
pub async fn check(State(state): State<AppState>) -> Json<CatalogHealth> {
    let database = moviedb_db::health_check(&state.pool).await.is_ok();
    let schema_version = if database {
        moviedb_db::applied_schema_version(&state.pool)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Could not read applied schema version");
                None
            })
    } else {
        None
    };
    let expected_schema_version = moviedb_db::latest_schema_version();

    let status = if database && schema_version == expected_schema_version {
        "ok"
    } else {
        "degraded"
    };

    Json(CatalogHealth {
        status,
        database,
        schema_version,
        expected_schema_version,
    })
}
