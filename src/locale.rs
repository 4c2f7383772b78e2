// SPDX-License-Identifier: MPL-2.0

//! Locale identifiers and path-based locale resolution.
//!
//! The first segment of a request path decides which locale the page is
//! served in. Resolution is a pure function of its inputs so the same path
//! always yields the same locale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Locale the site falls back to when a path carries no recognizable locale.
pub const DEFAULT_LOCALE: Locale = Locale::Vi;

/// Every locale the site ships catalogs for.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::Vi, Locale::En];

/// A locale the site can be served in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Vi,
    En,
}

impl Locale {
    /// Lowercase tag used in URLs and catalog file names.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Vi => "vi",
            Locale::En => "en",
        }
    }

    /// Human-readable name shown by the language switcher.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::Vi => "Tiếng Việt",
            Locale::En => "English",
        }
    }

    /// The other supported locale. The switcher flips between the two.
    #[must_use]
    pub fn toggle(&self) -> Locale {
        match self {
            Locale::Vi => Locale::En,
            Locale::En => Locale::Vi,
        }
    }

    /// Matches a raw path segment against a locale tag.
    ///
    /// Segments are matched exactly; `"EN"` is not a locale segment.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Locale> {
        match segment {
            "vi" => Some(Locale::Vi),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// Parses a BCP 47 language identifier and keeps the language subtag.
    ///
    /// Accepts regional variants such as `vi-VN` or `en-US`, which is what
    /// [`sys_locale`] typically reports.
    #[must_use]
    pub fn from_lang_id(tag: &str) -> Option<Locale> {
        let id: LanguageIdentifier = tag.trim().parse().ok()?;
        match id.language.as_str() {
            "vi" => Some(Locale::Vi),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_lang_id(s).ok_or_else(|| format!("unsupported locale '{}'", s))
    }
}

/// Resolves the locale a request path should be served in.
///
/// Looks at the first non-empty `/`-separated segment. If it names a locale
/// in `supported`, that locale wins; otherwise `fallback` does. The rest of
/// the path never participates, so `/en/anything/else` resolves the same as
/// `/en`.
#[must_use]
pub fn resolve_locale(path: &str, supported: &[Locale], fallback: Locale) -> Locale {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(Locale::from_segment)
        .filter(|locale| supported.contains(locale))
        .unwrap_or(fallback)
}

/// Picks the locale a fresh session starts in.
///
/// Order of precedence: explicit CLI choice, then the persisted config
/// value, then the operating system locale. Each candidate is parsed
/// leniently (`en-US` counts as `en`) and must be in `supported`. Returns
/// `None` when nothing usable was found so the caller can apply its own
/// fallback.
#[must_use]
pub fn detect_locale(
    cli: Option<&str>,
    config: Option<&str>,
    supported: &[Locale],
) -> Option<Locale> {
    let candidate = |tag: &str| Locale::from_lang_id(tag).filter(|l| supported.contains(l));

    if let Some(locale) = cli.and_then(candidate) {
        return Some(locale);
    }
    if let Some(locale) = config.and_then(candidate) {
        return Some(locale);
    }
    sys_locale::get_locale().as_deref().and_then(candidate)
}
