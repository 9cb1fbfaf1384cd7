//! Contact cards for the "Let's Connect" section.

use super::{profile, tint};
use crate::components::icon::IconKind;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactEntry {
    pub label: &'static str,
    pub value: &'static str,
    /// Outbound link; `None` renders a static, non-hovering card.
    pub href: Option<&'static str>,
    pub icon: IconKind,
    pub tint: &'static str,
}

pub const CONTACTS: &[ContactEntry] = &[
    ContactEntry {
        label: "Phone",
        value: profile::PHONE,
        href: Some(profile::PHONE_HREF),
        icon: IconKind::Phone,
        tint: tint::TEAL,
    },
    ContactEntry {
        label: "Email",
        value: profile::EMAIL,
        href: Some(profile::EMAIL_HREF),
        icon: IconKind::Mail,
        tint: tint::PURPLE,
    },
    ContactEntry {
        label: "GitHub",
        value: profile::GITHUB_USER,
        href: Some(profile::GITHUB_URL),
        icon: IconKind::Github,
        tint: tint::ORANGE,
    },
    ContactEntry {
        label: "Location",
        value: profile::LOCATION,
        href: None,
        icon: IconKind::MapPin,
        tint: tint::YELLOW,
    },
];

pub const INVITATION: &str =
    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.";
