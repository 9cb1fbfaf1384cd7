//! Client-side UI state.

pub mod ui;
