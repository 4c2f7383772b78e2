// SPDX-License-Identifier: MPL-2.0
//! Namespace-scoped message lookup.
//!
//! A [`Section`] borrows a loaded catalog and resolves keys relative to one
//! namespace (`nav`, `hero`, `contact.form`, ...). Lookup never fails:
//! a key that misses or holds the wrong shape falls back to the key itself
//! and leaves a diagnostic behind.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::diagnostics::DiagnosticEventKind;
use crate::i18n::catalog::Catalog;

/// Message accessor scoped to one catalog namespace.
#[derive(Debug, Clone)]
pub struct Section<'a> {
    catalog: &'a Catalog,
    prefix: String,
}

impl<'a> Section<'a> {
    pub(crate) fn new(catalog: &'a Catalog, prefix: &str) -> Self {
        Self {
            catalog,
            prefix: prefix.to_string(),
        }
    }

    /// Fully qualified dotted key for `key` within this section.
    #[must_use]
    pub fn qualify(&self, key: &str) -> String {
        if self.prefix.is_empty() {
            key.to_string()
        } else if key.is_empty() {
            self.prefix.clone()
        } else {
            format!("{}.{}", self.prefix, key)
        }
    }

    /// Resolves `key` to its message text.
    ///
    /// A missing key, or a key holding anything but a string, resolves to
    /// the fully qualified key so the page keeps rendering. Both cases are
    /// recorded as diagnostics.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        let qualified = self.qualify(key);
        match self.value(&qualified) {
            Some(text) => text.to_string(),
            None => qualified,
        }
    }

    /// Resolves `key` and substitutes `{name}` placeholders.
    ///
    /// Placeholders with no matching parameter stay in the text verbatim.
    /// When the key itself misses, the fallback key is returned without
    /// substitution.
    #[must_use]
    pub fn tr_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let qualified = self.qualify(key);
        match self.value(&qualified) {
            Some(text) => interpolate(text, params),
            None => qualified,
        }
    }

    /// Resolves `key`, falling back to `default` instead of the key.
    #[must_use]
    pub fn tr_or(&self, key: &str, default: &str) -> String {
        let qualified = self.qualify(key);
        match self.value(&qualified) {
            Some(text) => text.to_string(),
            None => default.to_string(),
        }
    }

    /// Raw catalog value under `key`, whatever its shape.
    ///
    /// No fallback and no diagnostics; callers that can handle structured
    /// data inspect the value themselves.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.catalog.lookup(&self.qualify(key))
    }

    /// Array of values under `key`, or an empty slice.
    ///
    /// An absent key yields no items. A present key with a non-array shape
    /// also yields no items but is recorded as malformed.
    #[must_use]
    pub fn seq(&self, key: &str) -> &'a [Value] {
        match self.raw(key) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(_) => {
                self.catalog
                    .diagnostics()
                    .record(DiagnosticEventKind::MalformedValue {
                        key: self.qualify(key),
                    });
                &[]
            }
            None => &[],
        }
    }

    /// Deserializes the array under `key` into typed records.
    ///
    /// Entries that do not match the target shape are dropped and recorded,
    /// mirroring how the pages skip incomplete content instead of failing.
    #[must_use]
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.seq(key)
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item.clone()) {
                Ok(record) => Some(record),
                Err(_) => {
                    self.catalog
                        .diagnostics()
                        .record(DiagnosticEventKind::MalformedValue {
                            key: format!("{}[{}]", self.qualify(key), index),
                        });
                    None
                }
            })
            .collect()
    }

    /// Accessor scoped one namespace deeper.
    #[must_use]
    pub fn subsection(&self, key: &str) -> Section<'a> {
        Section {
            catalog: self.catalog,
            prefix: self.qualify(key),
        }
    }

    fn value(&self, qualified: &str) -> Option<&'a str> {
        match self.catalog.lookup(qualified) {
            Some(Value::String(text)) => Some(text.as_str()),
            Some(_) => {
                self.catalog
                    .diagnostics()
                    .record(DiagnosticEventKind::MalformedValue {
                        key: qualified.to_string(),
                    });
                None
            }
            None => {
                self.catalog
                    .diagnostics()
                    .record(DiagnosticEventKind::MissingKey {
                        key: qualified.to_string(),
                    });
                None
            }
        }
    }
}

/// Replaces `{name}` placeholders with their parameter values.
fn interpolate(text: &str, params: &[(&str, &str)]) -> String {
    let mut out = text.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
