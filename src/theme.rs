// SPDX-License-Identifier: MPL-2.0

//! Theme preference handling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Theme preference selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if dark colors should be used.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Fall back to dark when detection is unavailable.
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Explicit mode the theme toggle lands on from the current one.
    ///
    /// Toggling always leaves `System`: the user has now stated a
    /// preference, and that preference is the opposite of whatever is
    /// currently in effect.
    #[must_use]
    pub fn toggled(&self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("unknown theme mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_report_darkness() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn toggling_light_yields_dark() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("LIGHT".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!("system".parse::<ThemeMode>(), Ok(ThemeMode::System));
        assert!("solarized".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn serializes_as_lowercase() {
        let json = serde_json::to_string(&ThemeMode::System).expect("serialize");
        assert_eq!(json, "\"system\"");
        let parsed: ThemeMode = serde_json::from_str("\"dark\"").expect("deserialize");
        assert_eq!(parsed, ThemeMode::Dark);
    }
}
