//! Request path classification.
//!
//! # Responsibilities
//! - Detect paths the router must never redirect (assets, API,
//!   framework internals, well-known files)
//! - Detect whether a path already carries a supported locale prefix
//!
//! # Design Decisions
//! - Exclusion lists are compile-time constants, no regex
//! - Extension matching is case-sensitive lowercase, matching the
//!   original site's asset naming
//! - Locale detection anchors on segment boundaries: exactly `/{loc}`
//!   or `/{loc}/...`

use crate::i18n::locale::{Locale, SUPPORTED_LOCALES};

/// Path prefixes that short-circuit to pass-through.
const EXCLUDED_PREFIXES: [&str; 3] = ["/api", "/_next", "/.well-known"];

/// Static file extensions that short-circuit to pass-through.
const EXCLUDED_EXTENSIONS: [&str; 14] = [
    ".ico", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".woff", ".woff2", ".ttf", ".eot",
    ".json", ".xml", ".txt",
];

/// Reserved well-known files served from the site root.
const EXCLUDED_FILES: [&str; 3] = ["/favicon.ico", "/robots.txt", "/sitemap.xml"];

/// The admin surface prefix; redirect behavior for it is configurable.
pub const ADMIN_PREFIX: &str = "/admin";

/// Returns true if the path must never be locale-redirected.
///
/// Checked before any locale logic. A missed exclusion here shows up as
/// a redirect loop or a broken asset load, so the rules are deliberately
/// broad: prefix rules are plain `starts_with`, so `/apiary` is
/// swallowed along with `/api`.
pub fn is_excluded(path: &str) -> bool {
    if EXCLUDED_FILES.contains(&path) {
        return true;
    }
    if EXCLUDED_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return true;
    }
    EXCLUDED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Returns true if the path is under the admin surface.
pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// Returns the locale prefix of the path, if it carries one.
///
/// A path "has a locale" only when it is exactly `/{loc}` or starts
/// with `/{loc}/`. Anything looser misclassifies paths like `/japan`
/// or `/ko-something`.
pub fn locale_prefix(path: &str) -> Option<Locale> {
    for locale in SUPPORTED_LOCALES {
        let prefix = locale.as_str();
        let rest = match path.strip_prefix('/').and_then(|p| p.strip_prefix(prefix)) {
            Some(rest) => rest,
            None => continue,
        };
        if rest.is_empty() || rest.starts_with('/') {
            return Some(locale);
        }
    }
    None
}

/// Returns true if the path already carries a supported locale prefix.
pub fn has_locale_prefix(path: &str) -> bool {
    locale_prefix(path).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_prefixes() {
        assert!(is_excluded("/api/posts"));
        assert!(is_excluded("/api"));
        assert!(is_excluded("/_next/static/chunk.js.map.txt"));
        assert!(is_excluded("/.well-known/security.txt"));
        // Prefix rule, not segment rule: /apiary is reserved too
        assert!(is_excluded("/apiary"));
        assert!(!is_excluded("/reports"));
    }

    #[test]
    fn test_excluded_extensions() {
        assert!(is_excluded("/shiftjapan-og.png"));
        assert!(is_excluded("/fonts/noto.woff2"));
        assert!(is_excluded("/en/manifest.json"));
        assert!(is_excluded("/data/report.xml"));
        assert!(!is_excluded("/reports"));
    }

    #[test]
    fn test_well_known_files() {
        assert!(is_excluded("/favicon.ico"));
        assert!(is_excluded("/robots.txt"));
        assert!(is_excluded("/sitemap.xml"));
    }

    #[test]
    fn test_locale_prefix_exact_segments() {
        // P2: anchored matches only
        assert_eq!(locale_prefix("/ja"), Some(Locale::Ja));
        assert_eq!(locale_prefix("/en/about"), Some(Locale::En));
        assert_eq!(locale_prefix("/ko/report/x"), Some(Locale::Ko));

        assert_eq!(locale_prefix("/japan"), None);
        assert_eq!(locale_prefix("/ko-something"), None);
        assert_eq!(locale_prefix("/environ"), None);
        assert_eq!(locale_prefix("/"), None);
        assert_eq!(locale_prefix(""), None);
    }

    #[test]
    fn test_admin_path_detection() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/posts"));
        assert!(!is_admin_path("/administrator"));
        assert!(!is_admin_path("/ja/admin"));
    }
}
