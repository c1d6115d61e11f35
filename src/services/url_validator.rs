use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::{
        documentation_slugs::KNOWN_DOCUMENTATION_SLUGS, DOCS_BASE_URL, DOCS_SLUG_SUFFIX,
        SUFFIX_TOPIC_KEYWORDS,
    },
    models::domain::UrlCheck,
};

/// Generic or malformed slugs that never point at a real documentation page.
static DISALLOWED_SLUGS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^unreal-engine-\d+$",
        r"^unreal-engine$",
        r"^ue\d+$",
        r"^overview$",
        r"^introduction$",
        r"\s",
        r"[A-Z]",
        r"^[a-z]+$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("DISALLOWED_SLUGS are valid regex patterns"))
    .collect()
});

pub fn is_known_slug(slug: &str) -> bool {
    KNOWN_DOCUMENTATION_SLUGS.binary_search(&slug).is_ok()
}

/// Scores how likely `url` is a real page on the documentation site.
pub fn check_url(url: &str) -> UrlCheck {
    if url.trim().is_empty() {
        return UrlCheck::missing();
    }

    let Some(rest) = url.strip_prefix(DOCS_BASE_URL) else {
        return UrlCheck::invalid(0, "Not an Epic Games documentation URL");
    };

    let slug = rest
        .split('#')
        .next()
        .and_then(|s| s.split('?').next())
        .unwrap_or_default();

    if slug.trim().is_empty() {
        return UrlCheck::invalid(10, "URL has no specific page path");
    }

    if DISALLOWED_SLUGS.iter().any(|re| re.is_match(slug)) {
        return UrlCheck::invalid(20, format!("Invalid URL pattern: \"{slug}\""));
    }

    if is_known_slug(slug) {
        return UrlCheck::valid(100, None);
    }

    if SUFFIX_TOPIC_KEYWORDS.iter().any(|k| slug.contains(k)) && !slug.ends_with(DOCS_SLUG_SUFFIX) {
        return UrlCheck::valid(
            60,
            Some(format!("URL may be missing \"{DOCS_SLUG_SUFFIX}\" suffix")),
        );
    }

    if slug.chars().count() < 10 {
        return UrlCheck::valid(40, Some("URL slug seems too short".to_string()));
    }

    if slug.contains("--") {
        return UrlCheck::invalid(30, "URL has double hyphens");
    }

    UrlCheck::valid(70, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(slug: &str) -> String {
        format!("{DOCS_BASE_URL}{slug}")
    }

    #[test]
    fn test_empty_url_is_soft_failure() {
        let check = check_url("   ");
        assert!(!check.is_valid);
        assert!(check.is_missing);
        assert_eq!(check.confidence, 0);
    }

    #[test]
    fn test_foreign_domain_is_rejected() {
        let check = check_url("https://www.reddit.com/r/unrealengine/");
        assert!(!check.is_valid);
        assert!(!check.is_missing);
        assert_eq!(
            check.warning.as_deref(),
            Some("Not an Epic Games documentation URL")
        );
    }

    #[test]
    fn test_base_url_without_page() {
        let check = check_url(DOCS_BASE_URL);
        assert_eq!(check.confidence, 10);
        assert!(!check.is_valid);
    }

    #[test]
    fn test_disallowed_patterns() {
        for slug in ["unreal-engine-5", "ue5", "overview", "nanite", "Nanite-Overview"] {
            let check = check_url(&docs(slug));
            assert!(!check.is_valid, "{slug} should be rejected");
            assert_eq!(check.confidence, 20);
        }
    }

    #[test]
    fn test_known_slug_scores_full_confidence() {
        let check = check_url(&docs("nanite-virtualized-geometry-in-unreal-engine#overview"));
        assert!(check.is_valid);
        assert_eq!(check.confidence, 100);
        assert!(check.warning.is_none());
    }

    #[test]
    fn test_topic_keyword_without_suffix_is_flagged() {
        let check = check_url(&docs("lumen-performance-guide"));
        assert!(check.is_valid);
        assert_eq!(check.confidence, 60);
        assert!(check.warning.unwrap().contains(DOCS_SLUG_SUFFIX));
    }

    #[test]
    fn test_short_and_double_hyphen_slugs() {
        let short = check_url(&docs("pso-cache"));
        assert!(short.is_valid);
        assert_eq!(short.confidence, 40);

        let doubled = check_url(&docs("render--targets-explained"));
        assert!(!doubled.is_valid);
        assert_eq!(doubled.confidence, 30);
    }

    #[test]
    fn test_plausible_unknown_slug() {
        let check = check_url(&docs("render-targets-explained?lang=en"));
        assert!(check.is_valid);
        assert_eq!(check.confidence, 70);
    }
}
