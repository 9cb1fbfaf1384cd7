//! Pages served by the router.
//!
//! The site is one scrolling page; `home` lays out every section in order.

pub mod home;
