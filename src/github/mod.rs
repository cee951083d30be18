pub mod client;
pub mod link;
pub mod paginator;
pub mod source;

pub use client::GitHubClient;
pub use link::{next_page_url, parse_link_header};
pub use paginator::Paginator;
pub use source::RepoSource;
