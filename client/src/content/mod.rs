//! Static portfolio content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every string shown on the page lives here as `'static` data. Section
//! components read these tables directly; nothing is fetched, mutated, or
//! shared between sections at runtime.

pub mod contact;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod resume;
pub mod sections;
pub mod skills;

/// Background tints used by cards, chips, and stickers.
pub mod tint {
    pub const HIGHLIGHT: &str = "#ffeb3b";
    pub const ORANGE: &str = "#ffccbc";
    pub const PURPLE: &str = "#e1bee7";
    pub const TEAL: &str = "#b2dfdb";
    pub const GREEN: &str = "#c8e6c9";
    pub const BLUE: &str = "#bbdefb";
    pub const YELLOW: &str = "#fff9c4";
    pub const INDIGO: &str = "#c5cae9";
    pub const LIME: &str = "#dcedc8";
    pub const CORAL: &str = "#ff9e80";
}
