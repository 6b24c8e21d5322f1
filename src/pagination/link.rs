//! RFC 5988 `Link` header parsing
//!
//! Format: `<https://api.example.com/items?page=2>; rel="next", ...`
//!
//! A page's metadata may carry several links with several relations; only
//! the `next` relation drives continuation. Anything missing or malformed
//! means "no further pages", never an error.

use super::types::PageLink;
use reqwest::header::HeaderMap;

/// The link relation that drives continuation
pub const REL_NEXT: &str = "next";

/// Extract the continuation link for `rel` from response headers
pub fn next_link(headers: &HeaderMap, rel: &str) -> Option<PageLink> {
    headers
        .get("link")
        .and_then(|v| v.to_str().ok())
        .and_then(|header| parse_link_header(header, rel))
        .map(PageLink::new)
}

/// Parse a Link header and extract the URL for the given rel
fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                let rel_value = stripped.trim_matches('"').trim_matches('\'');
                rel = Some(rel_value);
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}
