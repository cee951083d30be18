//! Pure transforms over normalized repository lists.
//!
//! None of these mutate their input; sorts and filters return fresh vectors.
//! All sorts are stable, so equal keys keep their relative input order.

use icu_collator::{Collator, CollatorOptions};

use crate::models::{RawRepository, Repository};

pub fn normalize(raw: RawRepository) -> Repository {
    Repository::from(raw)
}

pub fn normalize_all(raw: Vec<RawRepository>) -> Vec<Repository> {
    raw.into_iter().map(normalize).collect()
}

/// Repositories with strictly more than `min` stars.
pub fn filter_by_stars(min: u64, repos: &[Repository]) -> Vec<Repository> {
    repos.iter().filter(|r| r.stars > min).cloned().collect()
}

pub fn sort_by_updated_desc(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}

pub fn sort_by_stars_desc(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    sorted.sort_by(|a, b| b.stars.cmp(&a.stars));
    sorted
}

/// Orders names with the Unicode root collation (the `und` locale).
pub fn sort_alphabetically(repos: &[Repository]) -> Vec<Repository> {
    let mut sorted = repos.to_vec();
    match Collator::try_new(&Default::default(), CollatorOptions::new()) {
        Ok(collator) => sorted.sort_by(|a, b| collator.compare(&a.name, &b.name)),
        Err(e) => {
            tracing::warn!("Root collator unavailable, using code point order: {}", e);
            sorted.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
    sorted
}

/// Drops repositories whose name starts with `h` or `H`.
pub fn filter_out_repos_starting_with_h(repos: &[Repository]) -> Vec<Repository> {
    repos
        .iter()
        .filter(|r| !starts_with_h(&r.name))
        .cloned()
        .collect()
}

pub fn take(n: usize, repos: &[Repository]) -> Vec<Repository> {
    repos.iter().take(n).cloned().collect()
}

pub fn sum_stars(repos: &[Repository]) -> u64 {
    repos.iter().map(|r| r.stars).sum()
}

fn starts_with_h(name: &str) -> bool {
    name.chars()
        .next()
        .map(|c| c.to_lowercase().next() == Some('h'))
        .unwrap_or(false)
}
