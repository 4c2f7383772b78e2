// SPDX-License-Identifier: MPL-2.0
//! Message catalog loading, parsing, and caching.
//!
//! Catalogs are JSON trees embedded into the binary at compile time, one
//! file per locale (`vi.json`, `en.json`). A catalog either parses fully or
//! the load fails; there is no partially usable catalog.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rust_embed::RustEmbed;
use serde_json::Value;

use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog};
use crate::error::CatalogError;
use crate::i18n::section::Section;
use crate::locale::Locale;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// A fully parsed message catalog for one locale.
///
/// The tree is immutable once loaded. Lookup walks dotted keys through
/// nested objects; shape checking is left to the accessors in
/// [`Section`].
#[derive(Debug)]
pub struct Catalog {
    locale: Locale,
    root: Value,
    diagnostics: DiagnosticsLog,
}

impl Catalog {
    /// Parses raw catalog bytes into a message tree.
    ///
    /// Fails if the bytes are not valid JSON or the top level is not an
    /// object. On failure nothing of the input is retained.
    pub fn from_bytes(
        locale: Locale,
        bytes: &[u8],
        diagnostics: DiagnosticsLog,
    ) -> std::result::Result<Self, CatalogError> {
        let root: Value =
            serde_json::from_slice(bytes).map_err(|err| CatalogError::Malformed {
                locale,
                detail: err.to_string(),
            })?;
        if !root.is_object() {
            return Err(CatalogError::Malformed {
                locale,
                detail: "top level is not an object".to_string(),
            });
        }
        Ok(Self {
            locale,
            root,
            diagnostics,
        })
    }

    /// Locale this catalog was loaded for.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Walks a dotted key through the message tree.
    ///
    /// Returns `None` as soon as a path component is absent or the walk
    /// hits a non-object before the key is exhausted.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut node = &self.root;
        for part in key.split('.') {
            node = node.as_object()?.get(part)?;
        }
        Some(node)
    }

    /// Returns an accessor scoped to one namespace of the catalog.
    ///
    /// An empty prefix yields an accessor over the whole tree, where keys
    /// must be fully qualified.
    #[must_use]
    pub fn section(&self, prefix: &str) -> Section<'_> {
        Section::new(self, prefix)
    }

    pub(crate) fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }
}

/// Loads and caches one [`Catalog`] per locale.
///
/// Catalogs are normally read from the embedded assets. A directory
/// override (`--i18n-dir`) redirects reads to loose files on disk, which is
/// how tests and translators iterate without rebuilding.
///
/// Loading is idempotent: every successful load of a locale hands back the
/// same shared catalog. A failed load caches nothing, so the same locale
/// can be retried after the underlying resource is fixed.
pub struct CatalogStore {
    override_dir: Option<PathBuf>,
    cache: Mutex<HashMap<Locale, Arc<Catalog>>>,
    diagnostics: DiagnosticsLog,
}

impl CatalogStore {
    /// Creates a store over the embedded catalog assets.
    #[must_use]
    pub fn new(diagnostics: DiagnosticsLog) -> Self {
        Self {
            override_dir: None,
            cache: Mutex::new(HashMap::new()),
            diagnostics,
        }
    }

    /// Creates a store that reads catalogs from `dir` instead of the
    /// embedded assets.
    #[must_use]
    pub fn with_dir(dir: PathBuf, diagnostics: DiagnosticsLog) -> Self {
        Self {
            override_dir: Some(dir),
            cache: Mutex::new(HashMap::new()),
            diagnostics,
        }
    }

    /// Locales a catalog resource exists for, sorted by tag.
    #[must_use]
    pub fn available_locales(&self) -> Vec<Locale> {
        let mut found = Vec::new();
        match &self.override_dir {
            Some(dir) => {
                if let Ok(entries) = std::fs::read_dir(dir) {
                    for entry in entries.flatten() {
                        let name = entry.file_name();
                        if let Some(locale) = name
                            .to_string_lossy()
                            .strip_suffix(".json")
                            .and_then(Locale::from_segment)
                        {
                            found.push(locale);
                        }
                    }
                }
            }
            None => {
                for file in Asset::iter() {
                    if let Some(locale) = file
                        .as_ref()
                        .strip_suffix(".json")
                        .and_then(Locale::from_segment)
                    {
                        found.push(locale);
                    }
                }
            }
        }
        found.sort_by_key(|locale| locale.as_str());
        found.dedup();
        found
    }

    /// Returns the cached catalog for `locale`, if one was already loaded.
    #[must_use]
    pub fn cached(&self, locale: Locale) -> Option<Arc<Catalog>> {
        self.cache
            .lock()
            .expect("catalog cache lock poisoned")
            .get(&locale)
            .map(Arc::clone)
    }

    /// Loads the catalog for `locale`, reusing the cache when possible.
    ///
    /// The whole resource is read and parsed before anything becomes
    /// visible; on any failure the cache is left untouched and the error
    /// says which locale failed and why.
    pub async fn load(&self, locale: Locale) -> std::result::Result<Arc<Catalog>, CatalogError> {
        if let Some(catalog) = self.cached(locale) {
            return Ok(catalog);
        }

        let bytes = self.fetch_bytes(locale).await?;
        let catalog = Arc::new(Catalog::from_bytes(
            locale,
            &bytes,
            self.diagnostics.clone(),
        )?);

        let mut cache = self.cache.lock().expect("catalog cache lock poisoned");
        // Another task may have finished the same load while we were reading.
        if let Some(existing) = cache.get(&locale) {
            return Ok(Arc::clone(existing));
        }
        cache.insert(locale, Arc::clone(&catalog));
        drop(cache);

        self.diagnostics
            .record(DiagnosticEventKind::CatalogLoaded { locale });
        Ok(catalog)
    }

    async fn fetch_bytes(&self, locale: Locale) -> std::result::Result<Vec<u8>, CatalogError> {
        let filename = format!("{}.json", locale);
        match &self.override_dir {
            Some(dir) => {
                let path = dir.join(&filename);
                // An unreadable file counts as missing.
                tokio::fs::read(&path)
                    .await
                    .map_err(|_| CatalogError::MissingResource { locale })
            }
            None => Asset::get(&filename)
                .map(|file| file.data.into_owned())
                .ok_or(CatalogError::MissingResource { locale }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(locale: Locale, json: &str) -> Catalog {
        Catalog::from_bytes(locale, json.as_bytes(), DiagnosticsLog::new(16))
            .expect("catalog should parse")
    }

    #[test]
    fn lookup_walks_nested_objects() {
        let catalog = parse(
            Locale::En,
            r#"{"nav": {"home": "Home"}, "footer": {"copyright": "(c)"}}"#,
        );

        assert_eq!(
            catalog.lookup("nav.home").and_then(Value::as_str),
            Some("Home")
        );
        assert_eq!(
            catalog.lookup("footer.copyright").and_then(Value::as_str),
            Some("(c)")
        );
    }

    #[test]
    fn lookup_misses_return_none() {
        let catalog = parse(Locale::En, r#"{"nav": {"home": "Home"}}"#);

        assert!(catalog.lookup("nav.blog").is_none());
        assert!(catalog.lookup("missing.entirely").is_none());
        // Walking through a leaf string is a miss, not a panic.
        assert!(catalog.lookup("nav.home.deeper").is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = Catalog::from_bytes(
            Locale::Vi,
            b"{\"nav\": ",
            DiagnosticsLog::new(16),
        );
        match result {
            Err(CatalogError::Malformed { locale, .. }) => assert_eq!(locale, Locale::Vi),
            other => panic!("expected Malformed, got {:?}", other.map(|c| c.locale())),
        }
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let result = Catalog::from_bytes(Locale::En, b"[1, 2, 3]", DiagnosticsLog::new(16));
        assert!(matches!(result, Err(CatalogError::Malformed { .. })));
    }

    #[tokio::test]
    async fn load_from_directory_override() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join("en.json"),
            r#"{"nav": {"home": "Home"}}"#,
        )
        .expect("write catalog");

        let store = CatalogStore::with_dir(dir.path().to_path_buf(), DiagnosticsLog::new(16));
        let catalog = store.load(Locale::En).await.expect("load should succeed");

        assert_eq!(catalog.locale(), Locale::En);
        assert_eq!(
            catalog.lookup("nav.home").and_then(Value::as_str),
            Some("Home")
        );
    }

    #[tokio::test]
    async fn repeated_loads_share_one_catalog() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("vi.json"), r#"{"nav": {}}"#).expect("write catalog");

        let store = CatalogStore::with_dir(dir.path().to_path_buf(), DiagnosticsLog::new(16));
        let first = store.load(Locale::Vi).await.expect("first load");
        let second = store.load(Locale::Vi).await.expect("second load");

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn missing_resource_fails_without_caching() {
        let dir = tempdir().expect("create temp dir");
        let store = CatalogStore::with_dir(dir.path().to_path_buf(), DiagnosticsLog::new(16));

        let err = store.load(Locale::En).await.expect_err("load should fail");
        assert_eq!(err, CatalogError::MissingResource { locale: Locale::En });
        assert!(store.cached(Locale::En).is_none());
    }

    #[tokio::test]
    async fn failed_load_can_be_retried_after_fix() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join("en.json");
        std::fs::write(&path, "{ truncated").expect("write broken catalog");

        let store = CatalogStore::with_dir(dir.path().to_path_buf(), DiagnosticsLog::new(16));

        let err = store.load(Locale::En).await.expect_err("load should fail");
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert!(store.cached(Locale::En).is_none(), "failure must cache nothing");

        std::fs::write(&path, r#"{"nav": {"home": "Home"}}"#).expect("fix catalog");
        let catalog = store.load(Locale::En).await.expect("retry should succeed");
        assert_eq!(
            catalog.lookup("nav.home").and_then(Value::as_str),
            Some("Home")
        );
    }

    #[tokio::test]
    async fn load_records_catalog_loaded_once() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("vi.json"), r#"{"nav": {}}"#).expect("write catalog");

        let diagnostics = DiagnosticsLog::new(16);
        let store = CatalogStore::with_dir(dir.path().to_path_buf(), diagnostics.clone());

        store.load(Locale::Vi).await.expect("first load");
        store.load(Locale::Vi).await.expect("second load");

        let loads = diagnostics
            .kinds()
            .into_iter()
            .filter(|kind| matches!(kind, DiagnosticEventKind::CatalogLoaded { .. }))
            .count();
        assert_eq!(loads, 1);
    }

    #[tokio::test]
    async fn embedded_catalogs_cover_supported_locales() {
        let store = CatalogStore::new(DiagnosticsLog::new(16));

        let available = store.available_locales();
        assert_eq!(available, vec![Locale::En, Locale::Vi]);

        for locale in available {
            let catalog = store.load(locale).await.expect("embedded catalog loads");
            assert_eq!(catalog.locale(), locale);
            assert!(catalog.lookup("nav.home").is_some());
        }
    }

    #[test]
    fn available_locales_ignores_unrelated_files() {
        let dir = tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("en.json"), "{}").expect("write en");
        std::fs::write(dir.path().join("vi.json"), "{}").expect("write vi");
        std::fs::write(dir.path().join("fr.json"), "{}").expect("write fr");
        std::fs::write(dir.path().join("notes.txt"), "hi").expect("write txt");

        let store = CatalogStore::with_dir(dir.path().to_path_buf(), DiagnosticsLog::new(16));
        assert_eq!(store.available_locales(), vec![Locale::En, Locale::Vi]);
    }
}
