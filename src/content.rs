// SPDX-License-Identifier: MPL-2.0
//! Typed content records extracted from the message catalogs.
//!
//! Pages that render structured lists (services, jobs, social links) pull
//! them out of the catalog as these records. Deserialization doubles as
//! validation: an entry missing a required field is dropped rather than
//! rendered half-empty.

use serde::Deserialize;

use crate::locale::Locale;

/// One offered service on the home page.
///
/// All three fields are required; an entry without any of them is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// One position on the experience page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub project: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub tech_stack: String,
    /// Public project URL, when one exists.
    #[serde(default)]
    pub link: Option<String>,
}

/// One social profile link on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// Served path of the CV document for `locale`.
///
/// The CV is a static asset; only the Vietnamese edition carries a suffix.
#[must_use]
pub fn cv_path(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "/cv/VU-THI-HOAI-THU_FRONT_END_Vi.pdf",
        Locale::En => "/cv/VU-THI-HOAI-THU_FRONT_END.pdf",
    }
}

/// File name offered when downloading the CV for `locale`.
#[must_use]
pub fn cv_file_name(locale: Locale) -> &'static str {
    match locale {
        Locale::Vi => "VU-THI-HOAI-THU_FRONT_END_Vi.pdf",
        Locale::En => "VU-THI-HOAI-THU_FRONT_END.pdf",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_item_requires_all_fields() {
        let full = r#"{"icon": "design", "title": "UI", "description": "Interfaces"}"#;
        let item: ServiceItem = serde_json::from_str(full).expect("full item parses");
        assert_eq!(item.title, "UI");

        let partial = r#"{"icon": "design", "title": "UI"}"#;
        assert!(serde_json::from_str::<ServiceItem>(partial).is_err());
    }

    #[test]
    fn job_record_link_is_optional() {
        let json = r#"{
            "id": 1,
            "company": "Acme",
            "position": "Front End Developer",
            "duration": "2022 - 2024",
            "project": "Storefront",
            "description": "Built the storefront",
            "responsibilities": ["Build UI", "Review code"],
            "tech_stack": "React, TypeScript"
        }"#;
        let job: JobRecord = serde_json::from_str(json).expect("job parses");
        assert_eq!(job.id, 1);
        assert_eq!(job.responsibilities.len(), 2);
        assert_eq!(job.link, None);
    }

    #[test]
    fn job_record_accepts_link() {
        let json = r#"{
            "id": 2,
            "company": "Acme",
            "position": "Developer",
            "duration": "2024",
            "project": "Portal",
            "description": "Internal portal",
            "responsibilities": [],
            "tech_stack": "Next.js",
            "link": "https://example.com"
        }"#;
        let job: JobRecord = serde_json::from_str(json).expect("job parses");
        assert_eq!(job.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn cv_paths_differ_per_locale() {
        assert_eq!(cv_path(Locale::Vi), "/cv/VU-THI-HOAI-THU_FRONT_END_Vi.pdf");
        assert_eq!(cv_path(Locale::En), "/cv/VU-THI-HOAI-THU_FRONT_END.pdf");
    }

    #[test]
    fn cv_file_name_is_the_basename_of_the_path() {
        for locale in [Locale::Vi, Locale::En] {
            let basename = cv_path(locale).rsplit('/').next().expect("non-empty path");
            assert_eq!(cv_file_name(locale), basename);
        }
    }
}
