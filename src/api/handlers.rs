use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::error::ApiError;
use crate::api::query::{self, LimitQuery, ReposQuery};
use crate::api::AppState;
use crate::models::Repository;
use crate::transforms;

const EXAMPLE_ORG: &str = "stackbuilders";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSumResponse {
    pub org: String,
    pub total_stars: u64,
}

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "GitHub Organization Repositories API",
        "endpoints": {
            "GET /org/:org/repos?minStars=5": "Get repositories with more than minStars stars (default: 5)",
            "GET /org/:org/latest?limit=5": "Get latest updated repositories (default: 5)",
            "GET /org/:org/star-sum": "Get sum of all repository stars",
            "GET /org/:org/top-stars?limit=5": "Get top repositories by stars (default: 5)",
            "GET /org/:org/alphabetical": "Get all repositories alphabetically, excluding those starting with 'h'"
        },
        "example": {
            "repos": format!("/org/{EXAMPLE_ORG}/repos"),
            "latest": format!("/org/{EXAMPLE_ORG}/latest"),
            "starSum": format!("/org/{EXAMPLE_ORG}/star-sum"),
            "topStars": format!("/org/{EXAMPLE_ORG}/top-stars"),
            "alphabetical": format!("/org/{EXAMPLE_ORG}/alphabetical")
        }
    }))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// GET /org/:org/repos?minStars=5
pub async fn repos(
    State(state): State<AppState>,
    Path(org): Path<String>,
    params: Result<Query<ReposQuery>, QueryRejection>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let min_stars = query::accept(params)?.min_stars()?;
    let repos = fetch_normalized(&state, &org).await?;
    Ok(Json(transforms::filter_by_stars(min_stars, &repos)))
}

/// GET /org/:org/latest?limit=5
pub async fn latest(
    State(state): State<AppState>,
    Path(org): Path<String>,
    params: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let limit = query::accept(params)?.limit()?;
    let repos = fetch_normalized(&state, &org).await?;
    Ok(Json(transforms::take(
        limit,
        &transforms::sort_by_updated_desc(&repos),
    )))
}

/// GET /org/:org/star-sum
pub async fn star_sum(
    State(state): State<AppState>,
    Path(org): Path<String>,
) -> Result<Json<StarSumResponse>, ApiError> {
    let repos = fetch_normalized(&state, &org).await?;
    let total_stars = transforms::sum_stars(&repos);
    Ok(Json(StarSumResponse { org, total_stars }))
}

/// GET /org/:org/top-stars?limit=5
pub async fn top_stars(
    State(state): State<AppState>,
    Path(org): Path<String>,
    params: Result<Query<LimitQuery>, QueryRejection>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let limit = query::accept(params)?.limit()?;
    let repos = fetch_normalized(&state, &org).await?;
    Ok(Json(transforms::take(
        limit,
        &transforms::sort_by_stars_desc(&repos),
    )))
}

/// GET /org/:org/alphabetical
pub async fn alphabetical(
    State(state): State<AppState>,
    Path(org): Path<String>,
) -> Result<Json<Vec<Repository>>, ApiError> {
    let repos = fetch_normalized(&state, &org).await?;
    Ok(Json(transforms::sort_alphabetically(
        &transforms::filter_out_repos_starting_with_h(&repos),
    )))
}

async fn fetch_normalized(state: &AppState, org: &str) -> Result<Vec<Repository>, ApiError> {
    tracing::debug!("Loading {} repositories from {}", org, state.source.name());
    let raw = state.source.list_org_repos(org).await?;
    Ok(transforms::normalize_all(raw))
}
