use async_trait::async_trait;

use crate::error::Result;
use crate::models::RawRepository;

/// Where the HTTP layer gets an organization's repositories from.
#[async_trait]
pub trait RepoSource: Send + Sync {
    async fn list_org_repos(&self, org: &str) -> Result<Vec<RawRepository>>;
    fn name(&self) -> &str;
}
