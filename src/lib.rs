pub mod api;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod transforms;

pub use api::{build_router, AppState};
pub use config::{Config, GitHubConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, RepoSource};
pub use models::{RawRepository, Repository};
