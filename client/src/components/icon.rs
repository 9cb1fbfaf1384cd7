//! Inline stroke icons.
//!
//! Outline icons drawn on a 24x24 grid with `currentColor` strokes, so they
//! inherit text color from their container.

use leptos::prelude::*;

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconKind {
    Brain,
    Briefcase,
    ChevronDown,
    Cloud,
    Code,
    Download,
    ExternalLink,
    Github,
    Globe,
    GraduationCap,
    Mail,
    MapPin,
    Menu,
    Pencil,
    Phone,
    Smartphone,
    Sparkles,
    X,
}

impl IconKind {
    pub const ALL: [Self; 18] = [
        Self::Brain,
        Self::Briefcase,
        Self::ChevronDown,
        Self::Cloud,
        Self::Code,
        Self::Download,
        Self::ExternalLink,
        Self::Github,
        Self::Globe,
        Self::GraduationCap,
        Self::Mail,
        Self::MapPin,
        Self::Menu,
        Self::Pencil,
        Self::Phone,
        Self::Smartphone,
        Self::Sparkles,
        Self::X,
    ];

    /// SVG child markup for the icon.
    pub const fn svg_body(self) -> &'static str {
        match self {
            Self::Brain => concat!(
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
                r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
                r#"<path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"/>"#,
                r#"<path d="M17.599 6.5a3 3 0 0 0 .399-1.375"/>"#,
                r#"<path d="M6.003 5.125A3 3 0 0 0 6.401 6.5"/>"#,
                r#"<path d="M3.477 10.896a4 4 0 0 1 .585-.396"/>"#,
                r#"<path d="M19.938 10.5a4 4 0 0 1 .585.396"/>"#,
                r#"<path d="M6 18a4 4 0 0 1-1.967-.516"/>"#,
                r#"<path d="M19.967 17.484A4 4 0 0 1 18 18"/>"#,
            ),
            Self::Briefcase => concat!(
                r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
                r#"<rect width="20" height="14" x="2" y="6" rx="2"/>"#,
            ),
            Self::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Self::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            Self::Code => concat!(
                r#"<path d="m18 16 4-4-4-4"/>"#,
                r#"<path d="m6 8-4 4 4 4"/>"#,
                r#"<path d="m14.5 4-5 16"/>"#,
            ),
            Self::Download => concat!(
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>"#,
                r#"<polyline points="7 10 12 15 17 10"/>"#,
                r#"<line x1="12" x2="12" y1="15" y2="3"/>"#,
            ),
            Self::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Self::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Self::Globe => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/>"#,
                r#"<path d="M2 12h20"/>"#,
            ),
            Self::GraduationCap => concat!(
                r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/>"#,
                r#"<path d="M6 12v5c3 3 9 3 12 0v-5"/>"#,
            ),
            Self::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Self::MapPin => concat!(
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
                r#"<circle cx="12" cy="10" r="3"/>"#,
            ),
            Self::Menu => concat!(
                r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
                r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
                r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
            ),
            Self::Pencil => concat!(
                r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/>"#,
                r#"<path d="m15 5 4 4"/>"#,
            ),
            Self::Phone => concat!(
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 "#,
                r#"19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 "#,
                r#"2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 "#,
                r#"2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            ),
            Self::Smartphone => concat!(
                r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/>"#,
                r#"<path d="M12 18h.01"/>"#,
            ),
            Self::Sparkles => concat!(
                r#"<path d="M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 "#,
                r#"9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 "#,
                r#"0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"/>"#,
                r#"<path d="M20 3v4"/><path d="M22 5h-4"/><path d="M4 17v2"/><path d="M5 18H3"/>"#,
            ),
            Self::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        }
    }
}

/// Outline icon sized in CSS pixels.
#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(default = 24)] size: u32,
    #[prop(default = 2.0)] stroke_width: f64,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let class = if class.is_empty() { "icon".to_owned() } else { format!("icon {class}") };

    view! {
        <svg
            class=class
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width=stroke_width.to_string()
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=kind.svg_body()
        ></svg>
    }
}
