// SPDX-License-Identifier: MPL-2.0
//! Process-wide preference state and the language switch state machine.
//!
//! The store holds the current locale, theme, and loading flag, and is the
//! single authority for changing locale. The URL path is the source of
//! truth: `switch_language` only navigates, and the locale field updates
//! when the path change is fed back through [`PreferenceStore::path_changed`].
//!
//! Observers subscribe to a watch channel and receive a fresh
//! [`PreferenceSnapshot`] after every state change.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsLog};
use crate::locale::{resolve_locale, Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
use crate::route::{switch_path, Navigator};
use crate::theme::ThemeMode;

/// Read-only view of the preference state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceSnapshot {
    /// Locale derived from the current path.
    pub locale: Locale,
    /// Active theme preference.
    pub theme: ThemeMode,
    /// True while a language switch is settling.
    pub is_loading: bool,
    /// Path the state was derived from.
    pub path: String,
}

#[derive(Debug)]
struct StoreState {
    path: String,
    locale: Locale,
    theme: ThemeMode,
    is_loading: bool,
    /// Bumped on every switch; lets a superseded settle timer detect
    /// that a newer switch restarted the sequence.
    epoch: u64,
    /// Locale the in-flight switch is heading for, if any.
    pending_target: Option<Locale>,
}

impl StoreState {
    fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            locale: self.locale,
            theme: self.theme,
            is_loading: self.is_loading,
            path: self.path.clone(),
        }
    }
}

/// Builder for [`PreferenceStore`].
///
/// Only the initial path and a navigator are mandatory; everything else
/// defaults to the supported-locale set, the Vietnamese fallback, and an
/// in-memory (non-persisted) configuration.
pub struct StoreBuilder {
    initial_path: String,
    navigator: Arc<dyn Navigator>,
    config: Config,
    config_dir: Option<PathBuf>,
    supported: Vec<Locale>,
    fallback: Locale,
    debounce: Option<Duration>,
    diagnostics: Option<DiagnosticsLog>,
}

impl StoreBuilder {
    #[must_use]
    pub fn new(initial_path: impl Into<String>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            initial_path: initial_path.into(),
            navigator,
            config: Config::default(),
            config_dir: None,
            supported: SUPPORTED_LOCALES.to_vec(),
            fallback: DEFAULT_LOCALE,
            debounce: None,
            diagnostics: None,
        }
    }

    /// Seeds the store from a loaded configuration (theme, settle window).
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Directory preference changes are persisted to.
    ///
    /// Without it, changes stay in memory for the session.
    #[must_use]
    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    #[must_use]
    pub fn with_supported(mut self, locales: &[Locale]) -> Self {
        self.supported = locales.to_vec();
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, locale: Locale) -> Self {
        self.fallback = locale;
        self
    }

    /// Overrides the settle window from the configuration.
    #[must_use]
    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = Some(window);
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticsLog) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<PreferenceStore> {
        let diagnostics = self.diagnostics.unwrap_or_default();
        let debounce = self
            .debounce
            .unwrap_or_else(|| Duration::from_millis(self.config.navigation.debounce_ms()));

        let locale = resolve_locale(&self.initial_path, &self.supported, self.fallback);
        diagnostics.record(DiagnosticEventKind::LocaleResolved {
            path: self.initial_path.clone(),
            locale,
        });

        let state = StoreState {
            path: self.initial_path,
            locale,
            theme: self.config.general.theme_mode,
            is_loading: false,
            epoch: 0,
            pending_target: None,
        };
        let (events, _) = watch::channel(state.snapshot());

        Arc::new(PreferenceStore {
            state: Mutex::new(state),
            events,
            navigator: self.navigator,
            config: Mutex::new(self.config),
            config_dir: self.config_dir,
            supported: self.supported,
            fallback: self.fallback,
            debounce,
            diagnostics,
        })
    }
}

/// Result of a [`PreferenceStore::switch_language`] call.
#[must_use = "await settle() or feed the navigated path back via path_changed"]
pub enum SwitchOutcome {
    /// A switch began; the timer settles the loading flag if no matching
    /// path change arrives first.
    Started(SettleTimer),
    /// The target was already the current locale; nothing happened.
    NoOp,
}

impl SwitchOutcome {
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, SwitchOutcome::NoOp)
    }

    /// Waits out the settle window. Returns true if this call cleared the
    /// loading flag, false if the switch was superseded, already settled
    /// through a path change, or never started.
    pub async fn settle(self) -> bool {
        match self {
            SwitchOutcome::Started(timer) => timer.settle().await,
            SwitchOutcome::NoOp => false,
        }
    }
}

/// Upper bound on how long a switch is allowed to stay loading.
///
/// Created by `switch_language`; awaiting it sleeps the configured window
/// and then clears the loading flag unless a newer switch bumped the epoch
/// or a path change already settled this one.
pub struct SettleTimer {
    store: Arc<PreferenceStore>,
    epoch: u64,
    window: Duration,
}

impl SettleTimer {
    pub async fn settle(self) -> bool {
        tokio::time::sleep(self.window).await;
        self.store.finish_switch(self.epoch)
    }
}

/// The process-wide preference context.
pub struct PreferenceStore {
    state: Mutex<StoreState>,
    events: watch::Sender<PreferenceSnapshot>,
    navigator: Arc<dyn Navigator>,
    config: Mutex<Config>,
    config_dir: Option<PathBuf>,
    supported: Vec<Locale>,
    fallback: Locale,
    debounce: Duration,
    diagnostics: DiagnosticsLog,
}

impl PreferenceStore {
    /// Current state as an owned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PreferenceSnapshot {
        self.state.lock().expect("store lock poisoned").snapshot()
    }

    /// Subscribes to state changes. The receiver starts at the current
    /// snapshot and is woken on every subsequent change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PreferenceSnapshot> {
        self.events.subscribe()
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.state.lock().expect("store lock poisoned").locale
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.state.lock().expect("store lock poisoned").theme
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().expect("store lock poisoned").is_loading
    }

    #[must_use]
    pub fn current_path(&self) -> String {
        self.state.lock().expect("store lock poisoned").path.clone()
    }

    /// Starts a language switch to `target`.
    ///
    /// Switching to the current locale is a no-op: no navigation, no state
    /// change, no notification. Otherwise the loading flag goes up, the
    /// rewritten path is handed to the navigator, and the language
    /// preference is persisted. The store's locale field is deliberately
    /// left alone; it follows the path, not the request.
    ///
    /// A second call while a switch is in flight restarts the sequence
    /// with the new target; the earlier settle timer becomes stale.
    pub fn switch_language(self: &Arc<Self>, target: Locale) -> SwitchOutcome {
        let (from, epoch, new_path) = {
            let mut state = self.state.lock().expect("store lock poisoned");
            if state.locale == target {
                return SwitchOutcome::NoOp;
            }
            state.is_loading = true;
            state.epoch += 1;
            state.pending_target = Some(target);
            (
                state.locale,
                state.epoch,
                switch_path(&state.path, target, &self.supported),
            )
        };

        self.diagnostics
            .record(DiagnosticEventKind::LocaleSwitch { from, to: target });

        {
            let mut config = self.config.lock().expect("config lock poisoned");
            config.general.language = Some(target.as_str().to_string());
        }
        self.persist_config();

        self.navigator.navigate(&new_path);
        self.publish();

        SwitchOutcome::Started(SettleTimer {
            store: Arc::clone(self),
            epoch,
            window: self.debounce,
        })
    }

    /// Feeds a completed navigation back into the store.
    ///
    /// The locale is re-derived from the path on every call; it is never
    /// trusted from earlier state. Landing on the path of the in-flight
    /// switch settles it immediately, ahead of the timer.
    pub fn path_changed(&self, path: &str) {
        let locale = resolve_locale(path, &self.supported, self.fallback);
        let settled = {
            let mut state = self.state.lock().expect("store lock poisoned");
            state.path = path.to_string();
            state.locale = locale;
            if state.pending_target == Some(locale) {
                state.is_loading = false;
                state.pending_target = None;
                true
            } else {
                false
            }
        };

        self.diagnostics.record(DiagnosticEventKind::LocaleResolved {
            path: path.to_string(),
            locale,
        });
        if settled {
            self.diagnostics
                .record(DiagnosticEventKind::SwitchSettled { locale });
        }
        self.publish();
    }

    /// Applies and persists a theme preference.
    pub fn set_theme(&self, theme: ThemeMode) {
        {
            let mut state = self.state.lock().expect("store lock poisoned");
            state.theme = theme;
        }
        {
            let mut config = self.config.lock().expect("config lock poisoned");
            config.general.theme_mode = theme;
        }
        self.persist_config();
        self.publish();
    }

    /// Flips to the opposite of whatever is currently in effect.
    pub fn toggle_theme(&self) {
        let next = self.theme().toggled();
        self.set_theme(next);
    }

    fn finish_switch(&self, epoch: u64) -> bool {
        let locale = {
            let mut state = self.state.lock().expect("store lock poisoned");
            if state.epoch != epoch || !state.is_loading {
                return false;
            }
            state.is_loading = false;
            state.pending_target = None;
            state.locale
        };

        self.diagnostics
            .record(DiagnosticEventKind::SwitchSettled { locale });
        self.publish();
        true
    }

    fn persist_config(&self) {
        let Some(dir) = &self.config_dir else {
            return;
        };
        let snapshot = self.config.lock().expect("config lock poisoned").clone();
        if let Err(err) = config::save_with_override(&snapshot, Some(dir.clone())) {
            self.diagnostics.record(DiagnosticEventKind::Warning {
                message: format!("failed to persist preferences: {}", err),
            });
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.events.send_replace(snapshot);
    }
}
