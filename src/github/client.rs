use async_trait::async_trait;
use reqwest::{header, Client, Url};

use crate::config::GitHubConfig;
use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::github::source::RepoSource;
use crate::models::RawRepository;

pub const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let base_url = Url::parse(&config.api_url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https") && !u.cannot_be_a_base())
            .ok_or_else(|| Error::Config(format!("invalid GitHub API URL {:?}", config.api_url)))?;

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// First page of an organization's public repositories, newest first.
    ///
    /// The organization is percent-encoded as a single path segment. `.` and
    /// `..` cannot be expressed as one and are rejected.
    pub fn org_repos_url(&self, org: &str) -> Result<Url> {
        if org.is_empty() || org == "." || org == ".." {
            return Err(Error::InvalidOrganization(org.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("invalid GitHub API URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(["orgs", org, "repos"]);
        url.query_pairs_mut()
            .clear()
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("type", "public")
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");
        Ok(url)
    }

    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<RawRepository>> {
        let url = self.org_repos_url(org)?;
        let paginator = Paginator::new(&self.client);
        tracing::info!("Fetching repositories for organization: {}", org);
        let repos = paginator.fetch_all(url.as_str()).await?;
        tracing::info!("Fetched {} repositories for {}", repos.len(), org);
        Ok(repos)
    }
}

#[async_trait]
impl RepoSource for GitHubClient {
    async fn list_org_repos(&self, org: &str) -> Result<Vec<RawRepository>> {
        GitHubClient::list_org_repos(self, org).await
    }

    fn name(&self) -> &str {
        "github"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> GitHubClient {
        let config = GitHubConfig::default().with_api_url(api_url).unwrap();
        GitHubClient::new(&config).unwrap()
    }

    #[test]
    fn test_org_repos_url() {
        let url = client("http://127.0.0.1:9999/")
            .org_repos_url("stackbuilders")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:9999/orgs/stackbuilders/repos?per_page=100&type=public&sort=updated&direction=desc"
        );
    }

    #[test]
    fn test_org_repos_url_keeps_base_path() {
        let url = client("https://ghe.example.com/api/v3")
            .org_repos_url("acme")
            .unwrap();
        assert_eq!(url.path(), "/api/v3/orgs/acme/repos");
    }

    #[test]
    fn test_org_is_a_single_encoded_segment() {
        let github = client("https://api.github.com");
        assert_eq!(
            github.org_repos_url("a/b").unwrap().path(),
            "/orgs/a%2Fb/repos"
        );
        assert_eq!(
            github.org_repos_url("../users/octocat").unwrap().path(),
            "/orgs/..%2Fusers%2Foctocat/repos"
        );
        let url = github.org_repos_url("x#frag?y").unwrap();
        assert_eq!(url.path(), "/orgs/x%23frag%3Fy/repos");
        assert_eq!(url.fragment(), None);
        assert_eq!(
            url.query(),
            Some("per_page=100&type=public&sort=updated&direction=desc")
        );
    }

    #[test]
    fn test_dot_segments_are_rejected() {
        let github = client("https://api.github.com");
        for org in ["", ".", ".."] {
            assert!(matches!(
                github.org_repos_url(org),
                Err(Error::InvalidOrganization(_))
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_user_agent() {
        let config = GitHubConfig {
            user_agent: "bad\nagent".to_string(),
            ..GitHubConfig::default()
        };
        assert!(matches!(
            GitHubClient::new(&config),
            Err(Error::InvalidHeader(_))
        ));
    }
}
