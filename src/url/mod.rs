//! URL handling module for Course-Harvest
//!
//! This module resolves scraped hrefs to absolute URLs and provides the
//! insertion-ordered, duplicate-free link list each phase accumulates into.

mod links;

pub use links::LinkList;

use url::Url;

/// Resolves an href to an absolute URL against the site base URL
///
/// Returns None if the link should be ignored:
/// - empty or whitespace-only hrefs
/// - javascript:, mailto:, tel: and data: links
/// - fragment-only links (same page anchors)
/// - hrefs that do not resolve to an HTTP(S) URL
///
/// # Example
///
/// ```
/// use course_harvest::url::resolve_href;
/// use url::Url;
///
/// let base = Url::parse("https://catalog.example.com").unwrap();
/// let resolved = resolve_href(&base, "/courses/history").unwrap();
/// assert_eq!(resolved.as_str(), "https://catalog.example.com/courses/history");
/// ```
pub fn resolve_href(base_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) if matches!(absolute_url.scheme(), "http" | "https") => {
            Some(absolute_url)
        }
        Ok(absolute_url) => {
            tracing::debug!("Ignoring non-HTTP link: {}", absolute_url);
            None
        }
        Err(e) => {
            tracing::debug!("Failed to resolve href '{}': {}", href, e);
            None
        }
    }
}
