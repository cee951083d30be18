use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use serde::Deserialize;

use crate::api::error::ApiError;

pub const DEFAULT_MIN_STARS: u64 = 5;
pub const DEFAULT_LIMIT: usize = 5;

/// Query parameters are taken as raw text and validated here. Together with
/// [`accept`] every malformed query string becomes a 400 with our own error
/// body instead of axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ReposQuery {
    #[serde(rename = "minStars")]
    pub min_stars: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl ReposQuery {
    pub fn min_stars(&self) -> Result<u64, ApiError> {
        parse_non_negative("minStars", self.min_stars.as_deref(), DEFAULT_MIN_STARS)
    }
}

impl LimitQuery {
    pub fn limit(&self) -> Result<usize, ApiError> {
        parse_non_negative("limit", self.limit.as_deref(), DEFAULT_LIMIT)
    }
}

/// Unwraps a `Query` extraction, turning axum's rejection (duplicate keys,
/// undecodable input) into a validation error.
pub fn accept<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(inner)| inner)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

fn parse_non_negative<T: std::str::FromStr>(
    name: &str,
    raw: Option<&str>,
    default: T,
) -> Result<T, ApiError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::Validation(format!(
            "{name} must be a non-negative integer, got {raw:?}"
        )));
    }
    trimmed
        .parse()
        .map_err(|_| ApiError::Validation(format!("{name} is out of range: {raw:?}")))
}
