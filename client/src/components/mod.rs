//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section plus the shared building blocks they are
//! drawn with (icons, sketch cards, section headings). Sections read static
//! data from `content` and hold no state beyond local hover/menu signals.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod icon;
pub mod navbar;
pub mod projects;
pub mod resume;
pub mod section_heading;
pub mod sketch_card;
pub mod skills;
