use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;

use crate::error::Error;

/// Error surfaced at the HTTP boundary.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed query parameter
    Validation(String),
    /// GitHub answered with an error status; passed through to the caller
    UpstreamStatus { status: u16, message: String },
    /// GitHub could not be reached
    UpstreamUnavailable(String),
    /// GitHub answered with a body we could not read
    UpstreamMalformed(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamMalformed(_) => "UPSTREAM_MALFORMED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            Self::UpstreamUnavailable(_) | Self::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::UpstreamStatus { message, .. } => write!(f, "{message}"),
            Self::UpstreamUnavailable(msg) => write!(f, "GitHub unavailable: {msg}"),
            Self::UpstreamMalformed(msg) => write!(f, "Malformed GitHub response: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::RemoteStatus { status, .. } => Self::UpstreamStatus {
                status,
                message: format!("GitHub error {status}"),
            },
            Error::Network(e) => Self::UpstreamUnavailable(e.to_string()),
            Error::Parse(e) => Self::UpstreamMalformed(e.to_string()),
            Error::InvalidOrganization(org) => {
                Self::Validation(format!("invalid organization {org:?}"))
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_status_passes_through() {
        let err = ApiError::from(Error::RemoteStatus {
            status: 404,
            url: "https://api.github.com/orgs/nope/repos".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "UPSTREAM_STATUS");
    }

    #[test]
    fn test_unusable_remote_status_becomes_bad_gateway() {
        let err = ApiError::UpstreamStatus {
            status: 200,
            message: "odd".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_parse_error_is_bad_gateway() {
        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = ApiError::from(Error::Parse(parse));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.error_code(), "UPSTREAM_MALFORMED");
    }

    #[test]
    fn test_invalid_organization_is_bad_request() {
        let err = ApiError::from(Error::InvalidOrganization("..".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = ApiError::Validation("limit must be a non-negative integer".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
