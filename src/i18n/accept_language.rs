//! `Accept-Language` negotiation.
//!
//! # Responsibilities
//! - Parse the header into weighted language candidates
//! - Rank candidates by quality weight, stable on ties
//! - Pick the first supported locale, or fall back to the default
//!
//! # Design Decisions
//! - Parsing is total: a malformed entry is skipped, never an error
//! - Only the primary subtag matters (`ko-KR` negotiates as `ko`)
//! - Missing `;q=` means weight 1.0 (RFC 9110 default)
//! - Stable sort preserves header order between equal weights

use crate::i18n::locale::{Locale, DEFAULT_LOCALE};

/// One parsed entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCandidate {
    /// Lowercased primary subtag, e.g. `ko` for `ko-KR`.
    pub primary: String,
    /// Quality weight in `[0.0, 1.0]`.
    pub weight: f32,
}

/// Parse an `Accept-Language` header value into ranked candidates.
///
/// Entries that cannot be parsed are dropped. The result is sorted by
/// descending weight; entries with equal weight keep their header order.
pub fn parse_accept_language(header: &str) -> Vec<LanguageCandidate> {
    let mut candidates: Vec<LanguageCandidate> = header
        .split(',')
        .filter_map(parse_entry)
        .collect();

    // sort_by is stable, which P3's tie rule relies on
    candidates.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}

/// Parse a single `language[-region][;q=weight]` entry.
fn parse_entry(entry: &str) -> Option<LanguageCandidate> {
    let mut parts = entry.split(';');

    let tag = parts.next()?.trim();
    if tag.is_empty() {
        return None;
    }

    let primary = tag
        .split('-')
        .next()
        .unwrap_or(tag)
        .trim()
        .to_ascii_lowercase();
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut weight = 1.0f32;
    for param in parts {
        let param = param.trim();
        if let Some(q) = param.strip_prefix("q=").or_else(|| param.strip_prefix("Q=")) {
            match q.trim().parse::<f32>() {
                Ok(v) if (0.0..=1.0).contains(&v) => weight = v,
                // Unparseable or out-of-range weight invalidates the entry
                _ => return None,
            }
        }
    }

    Some(LanguageCandidate { primary, weight })
}

/// Resolve the locale for a request that carries no locale prefix.
///
/// Walks the ranked candidates and returns the first supported locale;
/// absent header, empty header, or no supported match all resolve to the
/// default locale.
pub fn resolve_locale(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return DEFAULT_LOCALE;
    };

    for candidate in parse_accept_language(header) {
        if let Ok(locale) = candidate.primary.parse::<Locale>() {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_ordering() {
        // P3: highest q wins regardless of header position
        assert_eq!(
            resolve_locale(Some("en;q=0.5,ko;q=0.9,ja;q=0.1")),
            Locale::Ko
        );
    }

    #[test]
    fn test_fallback_when_no_supported_match() {
        // P4: only unsupported languages present
        assert_eq!(resolve_locale(Some("fr-FR,de;q=0.9")), Locale::Ja);
    }

    #[test]
    fn test_absent_header_uses_default() {
        // P7
        assert_eq!(resolve_locale(None), Locale::Ja);
        assert_eq!(resolve_locale(Some("")), Locale::Ja);
    }

    #[test]
    fn test_region_subtag_stripped() {
        assert_eq!(resolve_locale(Some("ko-KR,en;q=0.8")), Locale::Ko);
        assert_eq!(resolve_locale(Some("en-US;q=1.0,ja;q=0.8")), Locale::En);
    }

    #[test]
    fn test_default_weight_is_one() {
        // "ja" has implicit q=1.0 and beats en;q=0.9
        assert_eq!(resolve_locale(Some("en;q=0.9,ja")), Locale::Ja);
    }

    #[test]
    fn test_stable_order_on_tied_weights() {
        // Equal weights keep header order: en listed first wins
        assert_eq!(resolve_locale(Some("en;q=0.8,ko;q=0.8")), Locale::En);
        assert_eq!(resolve_locale(Some("ko;q=0.8,en;q=0.8")), Locale::Ko);
    }

    #[test]
    fn test_malformed_entries_skipped() {
        // Bad q value drops only that entry; resolution continues
        assert_eq!(resolve_locale(Some("en;q=banana,ko;q=0.5")), Locale::Ko);
        assert_eq!(resolve_locale(Some(",,;;q=0.5,ko")), Locale::Ko);
        assert_eq!(resolve_locale(Some("***,@@;q=1.0")), Locale::Ja);
    }

    #[test]
    fn test_out_of_range_weight_rejected() {
        assert_eq!(resolve_locale(Some("en;q=5.0,ko;q=0.3")), Locale::Ko);
    }

    #[test]
    fn test_parse_preserves_unsupported_candidates() {
        let parsed = parse_accept_language("fr;q=0.9,ko;q=0.4");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].primary, "fr");
        assert_eq!(parsed[1].primary, "ko");
    }
}
