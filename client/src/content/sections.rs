//! Page sections and the in-page anchor scheme.
//!
//! DESIGN
//! ======
//! Navigation items point at a [`SectionId`] rather than a free-form href, so
//! a nav link can only target a section the page knows how to render.
//! [`PAGE_SECTIONS`] is the render order `HomePage` follows.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Addressable content block of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Resume,
    Education,
    Contact,
}

impl SectionId {
    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    /// In-page fragment link (`#id`).
    pub const fn href(self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::About => "#about",
            Self::Skills => "#skills",
            Self::Experience => "#experience",
            Self::Projects => "#projects",
            Self::Resume => "#resume",
            Self::Education => "#education",
            Self::Contact => "#contact",
        }
    }
}

/// Sections in the order they are rendered, top to bottom.
pub const PAGE_SECTIONS: [SectionId; 8] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Experience,
    SectionId::Projects,
    SectionId::Resume,
    SectionId::Education,
    SectionId::Contact,
];

/// Navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

impl NavItem {
    pub const fn href(&self) -> &'static str {
        self.target.href()
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", target: SectionId::Home },
    NavItem { label: "About", target: SectionId::About },
    NavItem { label: "Skills", target: SectionId::Skills },
    NavItem { label: "Experience", target: SectionId::Experience },
    NavItem { label: "Projects", target: SectionId::Projects },
    NavItem { label: "Resume", target: SectionId::Resume },
    NavItem { label: "Contact", target: SectionId::Contact },
];

/// Resolve a fragment href (`#about`) to the section it addresses.
pub fn resolve_anchor(href: &str) -> Option<SectionId> {
    let id = href.strip_prefix('#')?;
    PAGE_SECTIONS.iter().copied().find(|section| section.id() == id)
}
