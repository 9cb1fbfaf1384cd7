//! Server-side rendering of the portfolio page.

#![recursion_limit = "256"]

use client::content::contact::CONTACTS;
use client::content::education::{EDUCATION, LANGUAGES};
use client::content::experience::EXPERIENCE;
use client::content::profile;
use client::content::projects::PROJECTS;
use client::content::resume::{DECLARATION, KEY_PROJECTS, ROLES, SKILL_LINES, SUMMARY};
use client::content::sections::{NAV_ITEMS, PAGE_SECTIONS, resolve_anchor};
use client::content::skills::SKILL_CATEGORIES;
use client::pages::home::HomePage;
use leptos::prelude::*;

fn render_home() -> String {
    Owner::new().with(|| view! { <HomePage/> }.to_html())
}

/// Text node content as the renderer writes it.
fn escaped(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn assert_contains_all<'a>(html: &str, needles: impl IntoIterator<Item = &'a str>) {
    let mut checked = 0;
    for needle in needles {
        assert!(html.contains(&escaped(needle)), "rendered page is missing {needle:?}");
        checked += 1;
    }
    assert!(checked > 0, "no needles were checked");
}

// =============================================================
// Structure
// =============================================================

#[test]
fn sections_render_in_page_order() {
    let html = render_home();
    let mut last = 0;
    for section in PAGE_SECTIONS {
        let marker = format!("id=\"{}\"", section.id());
        let at = html.find(&marker).unwrap_or_else(|| panic!("missing section {marker}"));
        assert!(at >= last, "{marker} rendered out of order");
        last = at;
    }
}

#[test]
fn every_in_page_link_resolves_to_a_rendered_section() {
    let html = render_home();
    let anchors: Vec<&str> = html
        .split("href=\"#")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();

    assert!(!anchors.is_empty());
    for id in anchors {
        let section = resolve_anchor(&format!("#{id}")).unwrap_or_else(|| panic!("dangling anchor #{id}"));
        assert!(html.contains(&format!("id=\"{}\"", section.id())));
    }
}

#[test]
fn navigation_links_are_rendered() {
    let html = render_home();
    for item in NAV_ITEMS {
        assert!(html.contains(&format!("href=\"{}\"", item.href())), "missing nav link {}", item.label);
        assert!(html.contains(item.label));
    }
}

#[test]
fn screen_only_chrome_is_marked_for_print() {
    let html = render_home();
    assert!(html.contains("id=\"resume\""));
    assert!(html.matches("print-hidden").count() >= 3, "navbar, footer and résumé chrome should be print-hidden");
}

// =============================================================
// Content
// =============================================================

#[test]
fn contact_details_are_rendered() {
    let html = render_home();
    assert_contains_all(&html, CONTACTS.iter().map(|c| c.value));
    assert!(html.contains(profile::EMAIL_HREF));
    assert!(html.contains(profile::PHONE_HREF));
    assert!(html.contains(profile::GITHUB_URL));
}

#[test]
fn external_links_open_in_a_new_tab() {
    let html = render_home();
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn skills_and_projects_are_rendered() {
    let html = render_home();
    assert_contains_all(&html, SKILL_CATEGORIES.iter().map(|c| c.title));
    assert_contains_all(&html, SKILL_CATEGORIES.iter().flat_map(|c| c.skills.iter().copied()));
    assert_contains_all(&html, PROJECTS.iter().map(|p| p.title));
    assert_contains_all(&html, PROJECTS.iter().map(|p| p.description));
    assert_contains_all(&html, PROJECTS.iter().filter_map(|p| p.outcome));
    assert_contains_all(&html, PROJECTS.iter().filter_map(|p| p.features));
    assert_contains_all(&html, PROJECTS.iter().flat_map(|p| p.tech.iter().copied()));
}

#[test]
fn ampersands_are_escaped_not_dropped() {
    let html = render_home();
    assert!(html.contains("Backend &amp; Web"));
    assert!(!html.contains("Backend & Web"));
}

#[test]
fn experience_and_education_are_rendered() {
    let html = render_home();
    for entry in EXPERIENCE {
        assert_contains_all(&html, [entry.role, entry.company, entry.period]);
        assert_contains_all(&html, entry.highlights.iter().copied());
    }
    assert_contains_all(&html, [EDUCATION.degree, EDUCATION.institution, EDUCATION.period]);
    assert_contains_all(&html, LANGUAGES.iter().flat_map(|l| [l.name, l.level]));
}

#[test]
fn resume_document_is_rendered() {
    let html = render_home();
    assert_contains_all(&html, [SUMMARY, DECLARATION]);
    assert_contains_all(&html, SKILL_LINES.iter().flat_map(|line| [line.label, line.items]));
    for role in ROLES {
        assert!(html.contains(&escaped(&role.heading())));
        assert_contains_all(&html, role.bullets.iter().map(|b| b.text));
        assert_contains_all(&html, role.bullets.iter().filter_map(|b| b.lead));
        assert_contains_all(&html, role.bullets.iter().flat_map(|b| b.details.iter().copied()));
    }
    for project in KEY_PROJECTS {
        assert_contains_all(&html, [project.tagline]);
        assert_contains_all(&html, project.points.iter().copied());
    }
}

#[test]
fn print_button_starts_enabled() {
    let html = render_home();
    assert!(html.contains("Download PDF / Print"));
    assert!(!html.contains("disabled"));
}

#[test]
fn identity_is_rendered() {
    let html = render_home();
    assert!(html.contains(profile::NAME));
    assert!(html.contains(profile::ROLE));
    assert!(html.contains(profile::PHOTO_SRC));
}
