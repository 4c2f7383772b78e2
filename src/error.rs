// SPDX-License-Identifier: MPL-2.0

//! Error handling for the crate.
//!
//! Catalog failures carry the locale they were raised for and map onto
//! translation keys via [`CatalogError::i18n_key`], so callers can surface
//! them through whichever catalog did load.

use std::fmt;

use crate::locale::Locale;

/// Failures raised while loading or parsing a message catalog.
///
/// A catalog either loads completely or not at all; these variants describe
/// the two ways the load can fail. There is no partial-catalog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog resource exists for the requested locale.
    MissingResource { locale: Locale },
    /// The catalog resource exists but is not valid JSON or not an object.
    Malformed { locale: Locale, detail: String },
}

impl CatalogError {
    /// Translation key describing this failure to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::MissingResource { .. } => "errors.catalog_missing",
            CatalogError::Malformed { .. } => "errors.catalog_malformed",
        }
    }

    /// Locale whose catalog failed to load.
    #[must_use]
    pub fn locale(&self) -> Locale {
        match self {
            CatalogError::MissingResource { locale } | CatalogError::Malformed { locale, .. } => {
                *locale
            }
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingResource { locale } => {
                write!(f, "no message catalog for locale '{}'", locale)
            }
            CatalogError::Malformed { locale, detail } => {
                write!(f, "malformed message catalog for locale '{}': {}", locale, detail)
            }
        }
    }
}

/// Top-level error type for the crate.
#[derive(Debug)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O Error: {}", msg),
            Error::Config(msg) => write!(f, "Config Error: {}", msg),
            Error::Catalog(err) => write!(f, "Catalog Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
