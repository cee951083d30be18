use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GitHub error {status} for {url}")]
    RemoteStatus { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid organization: {0:?}")]
    InvalidOrganization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Upstream status code carried by a `RemoteStatus` failure.
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Error::RemoteStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
