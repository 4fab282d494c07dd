//! Supported locales and the collection mapping.
//!
//! # Responsibilities
//! - Define the closed locale set and the default
//! - Parse and render locale identifiers (exact match only)
//! - Map each locale to its content collection identifier
//!
//! # Design Decisions
//! - Enum, not string: an invalid locale is unrepresentable past the edge
//! - `FromStr` is exact: "ja-JP" or "japan" do not parse
//! - Collection naming kept wire-compatible with the original store
//!   layout (`blog_ja`, `blog_en`, `blog_ko`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ja,
    En,
    Ko,
}

/// All supported locales, in canonical order (default first).
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::Ja, Locale::En, Locale::Ko];

/// The fallback locale when negotiation finds no match.
pub const DEFAULT_LOCALE: Locale = Locale::Ja;

impl Locale {
    /// Lowercase identifier used in URLs and headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ja => "ja",
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Human-readable name in the locale's own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Ja => "日本語",
            Locale::En => "English",
            Locale::Ko => "한국어",
        }
    }

    /// The content collection that holds this locale's posts.
    pub fn collection(&self) -> CollectionId {
        CollectionId(*self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported locale identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            "ko" => Ok(Locale::Ko),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// Identifier of a per-locale content collection.
///
/// Replaces ad-hoc `blog_${locale}` concatenation with one mapping that
/// every store access goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionId(Locale);

impl CollectionId {
    pub fn locale(&self) -> Locale {
        self.0
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blog_{}", self.0.as_str())
    }
}
