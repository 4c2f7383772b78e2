// SPDX-License-Identifier: MPL-2.0
//! Route parsing and locale-prefixed path construction.
//!
//! Every served page lives under `/{locale}/{page}`. Anything else, the
//! bare `/` included, is a not-found at the routing boundary. Path
//! rewriting for a language switch swaps the locale segment in place and
//! leaves the rest of the path alone.

use std::fmt;
use std::sync::Mutex;

use crate::locale::Locale;

/// The pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Skills,
    Experience,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Skills, Page::Experience, Page::Contact];

    /// URL segment and `nav` catalog key for this page.
    #[must_use]
    pub fn as_segment(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Skills => "skills",
            Page::Experience => "experience",
            Page::Contact => "contact",
        }
    }

    /// Matches a raw path segment against a page.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Page> {
        match segment {
            "home" => Some(Page::Home),
            "skills" => Some(Page::Skills),
            "experience" => Some(Page::Experience),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

/// A fully resolved `/{locale}/{page}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub locale: Locale,
    pub page: Page,
}

impl Route {
    #[must_use]
    pub fn new(locale: Locale, page: Page) -> Self {
        Self { locale, page }
    }

    /// Parses a request path into a route.
    ///
    /// Exactly two non-empty segments are accepted: a supported locale
    /// followed by a known page. A bare locale (`/vi`), an unknown first
    /// segment, or extra trailing segments all yield `None`, which the
    /// caller renders as not-found.
    #[must_use]
    pub fn parse(path: &str) -> Option<Route> {
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let locale = Locale::from_segment(segments.next()?)?;
        let page = Page::from_segment(segments.next()?)?;
        if segments.next().is_some() {
            return None;
        }
        Some(Route { locale, page })
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/{}", self.locale, self.page)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.locale, self.page)
    }
}

/// Rewrites `path` so it is served under `target`.
///
/// When the first non-empty segment is a supported locale it is swapped
/// for `target` and the rest of the path is preserved. When no locale
/// segment is present the target is prefixed instead; the result may well
/// be a not-found path, which the routing boundary handles like any other.
#[must_use]
pub fn switch_path(path: &str, target: Locale, supported: &[Locale]) -> String {
    let current = path
        .split('/')
        .find(|segment| !segment.is_empty())
        .and_then(Locale::from_segment)
        .filter(|locale| supported.contains(locale));

    match current {
        Some(_) => {
            let mut swapped = false;
            path.split('/')
                .map(|segment| {
                    if !swapped && !segment.is_empty() {
                        swapped = true;
                        target.as_str()
                    } else {
                        segment
                    }
                })
                .collect::<Vec<_>>()
                .join("/")
        }
        None => format!("/{}{}", target, path),
    }
}

/// Port to whatever performs the actual URL transition.
///
/// The preference store computes a target path and hands it off here;
/// navigation is fire-and-forget and last-write-wins.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// In-process [`Navigator`] that records every requested path.
///
/// Doubles as the "browser" for the text renderer and as the observable
/// endpoint in tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently requested path, if any navigation happened.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.history
            .lock()
            .expect("navigator lock poisoned")
            .last()
            .cloned()
    }

    /// Every requested path in order.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.lock().expect("navigator lock poisoned").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.history
            .lock()
            .expect("navigator lock poisoned")
            .push(path.to_string());
    }
}
