// SPDX-License-Identifier: MPL-2.0
//! Plain-text page rendering.
//!
//! Renders each routed page from catalog data alone, the way the site's
//! views consume it: namespace handles for flat text, typed records for
//! list-shaped content, interpolation for the hero greeting. The output is
//! what the demo binary prints.

use std::fmt::Write as _;

use crate::content::{cv_file_name, cv_path, JobRecord, ServiceItem, SocialLink};
use crate::i18n::Catalog;
use crate::route::{Page, Route};

/// Renders the page addressed by `route` from `catalog`.
#[must_use]
pub fn render_page(catalog: &Catalog, route: Route) -> String {
    let mut out = String::new();
    render_header(&mut out, catalog, route);
    match route.page {
        Page::Home => render_home(&mut out, catalog, route),
        Page::Skills => render_skills(&mut out, catalog),
        Page::Experience => render_experience(&mut out, catalog),
        Page::Contact => render_contact(&mut out, catalog),
    }
    render_footer(&mut out, catalog);
    out
}

/// The routing boundary's "not found" outcome as text.
#[must_use]
pub fn not_found(path: &str) -> String {
    format!("404: nothing at {path}\nKnown routes look like /vi/home or /en/skills.\n")
}

fn render_header(out: &mut String, catalog: &Catalog, route: Route) {
    let nav = catalog.section("nav");
    let _ = write!(out, "Hoài Thu |");
    for page in Page::ALL {
        let label = nav.tr(page.as_segment());
        if page == route.page {
            let _ = write!(out, " [{label}]");
        } else {
            let _ = write!(out, " {label}");
        }
    }
    // The switcher shows the inactive language, as the site header does.
    let _ = writeln!(
        out,
        " | {}",
        route.locale.toggle().as_str().to_uppercase()
    );
    let _ = writeln!(out);
}

fn render_home(out: &mut String, catalog: &Catalog, route: Route) {
    let hero = catalog.section("hero");
    let profile = catalog.section("profile");

    let name = profile.tr("name");
    let _ = writeln!(out, "{}", hero.tr_with("greeting", &[("name", &name)]));
    let _ = writeln!(out, "{}", hero.tr("headline"));
    let _ = writeln!(out, "{}", hero.tr("sub_headline"));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "[{}] -> /{}/contact",
        hero.tr("cta_primary"),
        route.locale
    );
    let _ = writeln!(
        out,
        "[{}] -> {} ({})",
        hero.tr("cta_secondary"),
        cv_path(route.locale),
        cv_file_name(route.locale)
    );
    let _ = writeln!(out);

    let services = catalog.section("services");
    let _ = writeln!(out, "{}", services.tr("title"));
    let _ = writeln!(out, "{}", services.tr("subtitle"));
    for item in services.records::<ServiceItem>("items") {
        let _ = writeln!(out, "  {} {}", item.icon, item.title);
        let _ = writeln!(out, "     {}", item.description);
    }
    let _ = writeln!(out);
}

fn render_skills(out: &mut String, catalog: &Catalog) {
    let skills = catalog.section("skills");
    let _ = writeln!(out, "{}", skills.tr("title"));
    let _ = writeln!(out, "{}", skills.tr("subtitle"));
    let _ = writeln!(out);

    // Category headings are fixed; only the tag lists are translated.
    let categories = [
        ("Programming Languages", "languages"),
        ("Frontend Technologies", "frontend"),
        ("UI Libraries & Frameworks", "ui_libraries"),
        ("Backend Technologies", "backend"),
    ];
    for (heading, key) in categories {
        let _ = writeln!(out, "{heading}");
        for tag in split_tags(&skills.tr(key)) {
            let _ = writeln!(out, "  - {tag}");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Soft Skills");
    for value in skills.seq("soft_skills") {
        if let Some(skill) = value.as_str() {
            let _ = writeln!(out, "  - {skill}");
        }
    }
    let _ = writeln!(out);
}

fn render_experience(out: &mut String, catalog: &Catalog) {
    let experience = catalog.section("experience");
    let _ = writeln!(out, "{}", experience.tr("title"));
    let _ = writeln!(out, "{}", experience.tr("subtitle"));
    let _ = writeln!(out);

    for job in experience.records::<JobRecord>("jobs") {
        match &job.link {
            Some(link) => {
                let _ = writeln!(out, "{} ({})", job.position, link);
            }
            None => {
                let _ = writeln!(out, "{}", job.position);
            }
        }
        let _ = writeln!(out, "{} | {}", job.company, job.duration);
        let _ = writeln!(out, "{}", job.project);
        let _ = writeln!(out, "{}", job.description);
        for responsibility in &job.responsibilities {
            let _ = writeln!(out, "  - {responsibility}");
        }
        let _ = writeln!(out, "  tech: {}", split_tags(&job.tech_stack).join(", "));
        let _ = writeln!(out);
    }
}

fn render_contact(out: &mut String, catalog: &Catalog) {
    let contact = catalog.section("contact");
    let profile = catalog.section("profile");

    let _ = writeln!(out, "{}", contact.tr("title"));
    let _ = writeln!(out, "{}", contact.tr("subtitle"));
    let _ = writeln!(out);
    let _ = writeln!(out, "{} | {}", profile.tr("name"), profile.tr("role"));
    let labelled = [
        ("phone_label", "phone"),
        ("email_label", "email"),
        ("address_label", "address"),
        ("website_label", "website"),
    ];
    for (label_key, value_key) in labelled {
        let _ = writeln!(out, "{}: {}", contact.tr(label_key), profile.tr(value_key));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", contact.tr("connect_title"));
    for social in profile.records::<SocialLink>("socials") {
        let _ = writeln!(out, "  {} {}: {}", social.icon, social.platform, social.url);
    }
    let _ = writeln!(out);

    let form = contact.subsection("form");
    let _ = writeln!(out, "{}", form.tr("title"));
    for field in ["name", "email", "subject", "message"] {
        let _ = writeln!(
            out,
            "  {}: ({})",
            form.tr(&format!("{field}_label")),
            form.tr(&format!("{field}_placeholder"))
        );
    }
    let _ = writeln!(out, "  [{}]", form.tr("submit"));
    let _ = writeln!(out);
}

fn render_footer(out: &mut String, catalog: &Catalog) {
    let footer = catalog.section("footer");
    let _ = writeln!(out, "---");
    let _ = writeln!(
        out,
        "{}",
        footer.tr_or("copyright", "© 2025 Portfolio. All rights reserved.")
    );
}

/// Splits a comma-separated tag string, dropping padding and empties.
fn split_tags(tags: &str) -> Vec<&str> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect()
}
