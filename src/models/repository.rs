use serde::{Deserialize, Serialize};

/// A repository record as returned by `GET /orgs/{org}/repos`.
///
/// Only the fields the API reshapes are kept; everything else in the
/// payload is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub stargazers_count: u64,
    pub updated_at: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    pub stars: u64,
    /// ISO-8601 text, compared lexicographically.
    pub updated_at: String,
    pub url: String,
}

impl From<RawRepository> for Repository {
    fn from(raw: RawRepository) -> Self {
        Self {
            name: raw.name,
            stars: raw.stargazers_count,
            updated_at: raw.updated_at,
            url: raw.html_url,
        }
    }
}
