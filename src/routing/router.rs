//! Locale routing decisions.
//!
//! # Responsibilities
//! - Combine exclusion rules, locale detection, and header negotiation
//!   into one per-request decision
//! - Build origin-relative redirect targets
//!
//! # Design Decisions
//! - Immutable after construction (rebuilt and swapped on config reload)
//! - Redirect targets are paths, not absolute URLs, so the response
//!   always keeps the scheme and host of the incoming request
//! - Root path collapses to `/{locale}`, never `/{locale}/`

use crate::i18n::accept_language::resolve_locale;
use crate::routing::classifier;

/// Routing options derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// When false (the default), `/admin/...` paths pass through
    /// without a locale prefix.
    pub redirect_admin: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            redirect_admin: false,
        }
    }
}

/// The outcome of classifying one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    /// Request continues unmodified.
    Pass,
    /// Request is redirected to a locale-qualified path.
    Redirect { target: String },
}

/// Per-request locale router.
///
/// Stateless between requests; every invocation is a pure function of
/// the path, the query string, and the `Accept-Language` header.
#[derive(Debug, Clone)]
pub struct LocaleRouter {
    options: RouterOptions,
}

impl LocaleRouter {
    pub fn new(options: RouterOptions) -> Self {
        Self { options }
    }

    /// Decide whether the request passes through or redirects.
    ///
    /// `query` is the raw query string without the leading `?`, carried
    /// over verbatim into the redirect target.
    pub fn decide(
        &self,
        path: &str,
        query: Option<&str>,
        accept_language: Option<&str>,
    ) -> RoutingDecision {
        // Exclusions come first: assets, API, framework internals.
        if classifier::is_excluded(path) {
            return RoutingDecision::Pass;
        }
        if !self.options.redirect_admin && classifier::is_admin_path(path) {
            return RoutingDecision::Pass;
        }
        if classifier::has_locale_prefix(path) {
            return RoutingDecision::Pass;
        }

        let locale = resolve_locale(accept_language);
        let mut target = if path == "/" {
            // Root collapses to `/{locale}`, never `/{locale}/`
            format!("/{}", locale)
        } else {
            format!("/{}{}", locale, path)
        };
        if let Some(q) = query {
            if !q.is_empty() {
                target.push('?');
                target.push_str(q);
            }
        }
        RoutingDecision::Redirect { target }
    }
}

impl Default for LocaleRouter {
    fn default() -> Self {
        Self::new(RouterOptions::default())
    }
}
