use std::collections::HashMap;

/// Parse a `Link` header into a map of relation name to URL.
///
/// GitHub Link headers look like:
/// `<https://api.github.com/organizations/123/repos?per_page=100&page=2>; rel="next", <...&page=3>; rel="last"`
///
/// Entries missing either the `<url>` or the `rel=` part are skipped, so a
/// malformed header yields an empty (or partial) map rather than an error.
pub fn parse_link_header(link_header: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for part in link_header.split(',') {
        let mut url = None;
        let mut rels = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') && segment.len() >= 2 {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rels = Some(value.trim_matches('"'));
            }
        }

        if let (Some(url), Some(rels)) = (url, rels) {
            if url.is_empty() {
                continue;
            }
            // rel may hold several space-separated relation types
            for rel in rels.split_whitespace() {
                links.entry(rel.to_string()).or_insert_with(|| url.to_string());
            }
        }
    }

    links
}

/// URL of the `rel="next"` page, if the header advertises one.
pub fn next_page_url(link_header: &str) -> Option<String> {
    parse_link_header(link_header).remove("next")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_header_full() {
        let header = r#"<https://api.github.com/organizations/5430905/repos?per_page=100&page=2>; rel="next", <https://api.github.com/organizations/5430905/repos?per_page=100&page=3>; rel="last""#;

        let links = parse_link_header(header);
        assert_eq!(
            links.get("next").map(String::as_str),
            Some("https://api.github.com/organizations/5430905/repos?per_page=100&page=2")
        );
        assert_eq!(
            links.get("last").map(String::as_str),
            Some("https://api.github.com/organizations/5430905/repos?per_page=100&page=3")
        );
    }

    #[test]
    fn test_next_page_url_absent_on_last_page() {
        let header = r#"<https://api.github.com/organizations/123/repos?page=1>; rel="prev", <https://api.github.com/organizations/123/repos?page=1>; rel="first""#;
        assert_eq!(next_page_url(header), None);
    }

    #[test]
    fn test_parse_link_header_empty() {
        assert!(parse_link_header("").is_empty());
        assert_eq!(next_page_url(""), None);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        assert_eq!(next_page_url(r#"https://example.com/page2; rel="next""#), None);
        assert_eq!(next_page_url("<https://example.com/page2>"), None);
        assert_eq!(next_page_url(r#"<>; rel="next""#), None);
        assert_eq!(next_page_url("garbage,,;"), None);
    }

    #[test]
    fn test_multiple_relations_in_one_entry() {
        let header = r#"<https://example.com/repos?page=2>; rel="next last""#;
        let links = parse_link_header(header);
        assert_eq!(links.get("next"), links.get("last"));
        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://example.com/repos?page=2")
        );
    }

    #[test]
    fn test_unquoted_rel() {
        let header = "<https://example.com/repos?page=4>; rel=next";
        assert_eq!(
            next_page_url(header).as_deref(),
            Some("https://example.com/repos?page=4")
        );
    }
}
