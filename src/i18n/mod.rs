// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides the message catalog machinery behind every page:
//! loading and caching one JSON catalog per locale, and resolving dotted
//! keys through namespace-scoped accessors.
//!
//! # Features
//!
//! - Embedded `vi.json`/`en.json` catalogs with an on-disk override for tests
//! - Atomic catalog loads: a catalog parses fully or the load fails
//! - Namespace accessors with `{name}` placeholder substitution
//! - Key-itself fallback so missing translations never break a page

pub mod catalog;
pub mod section;

pub use catalog::{Catalog, CatalogStore};
pub use section::Section;
