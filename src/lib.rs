// SPDX-License-Identifier: MPL-2.0
//! `folio_intl` is the locale-aware content engine behind a bilingual
//! Vietnamese/English portfolio site.
//!
//! It embeds one message catalog per locale, resolves the active locale
//! from the route path, offers namespace-scoped translation lookup with
//! `{param}` interpolation, and runs the preference state machine behind
//! language switches.

#![doc(html_root_url = "https://docs.rs/folio_intl/0.2.0")]

pub mod config;
pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod locale;
pub mod render;
pub mod route;
pub mod store;
pub mod theme;
