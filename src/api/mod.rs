pub mod error;
pub mod handlers;
pub mod query;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::github::RepoSource;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RepoSource>,
}

impl AppState {
    pub fn new(source: impl RepoSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/org/:org/repos", get(handlers::repos))
        .route("/org/:org/latest", get(handlers::latest))
        .route("/org/:org/star-sum", get(handlers::star_sum))
        .route("/org/:org/top-stars", get(handlers::top_stars))
        .route("/org/:org/alphabetical", get(handlers::alphabetical))
        .with_state(state)
}
