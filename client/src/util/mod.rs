//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Browser calls compile only under the `hydrate` feature; SSR and
//! native test builds take the no-op paths.

pub mod clock;
pub mod links;
pub mod print;
pub mod reveal;
