//! Utility functions and helpers.

pub mod http;

use chrono::Local;
use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Derive the workshop schedule URL from a studio overview URL.
///
/// The directory site serves studio pages under `/s/<slug>` and the matching
/// workshop schedule under `/sw/<slug>`. Returns `None` for URLs that do not
/// follow that scheme.
pub fn workshop_list_url(studio_url: &str) -> Option<String> {
    let parsed = Url::parse(studio_url).ok()?;
    let path = parsed.path();
    let rest = path.strip_prefix("/s/")?;
    if rest.is_empty() {
        return None;
    }
    let mut derived = parsed.clone();
    derived.set_path(&format!("/sw/{rest}"));
    Some(derived.to_string())
}

/// Current wall-clock time formatted the way records are stamped.
pub fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/sw/studio").unwrap();
        assert_eq!(
            resolve_url(&base, "/e/workshop-1"),
            "https://example.com/e/workshop-1"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_workshop_list_url() {
        assert_eq!(
            workshop_list_url("https://www.eversports.de/s/poda-studio"),
            Some("https://www.eversports.de/sw/poda-studio".to_string())
        );
    }

    #[test]
    fn test_workshop_list_url_rejects_other_paths() {
        assert_eq!(workshop_list_url("https://example.com/about"), None);
        assert_eq!(workshop_list_url("https://example.com/s/"), None);
        assert_eq!(workshop_list_url("not a url"), None);
    }

    #[test]
    fn test_now_stamp_shape() {
        let stamp = now_stamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
