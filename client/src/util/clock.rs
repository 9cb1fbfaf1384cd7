//! Current calendar year for the footer.

/// Year according to the browser clock when hydrated, the UTC system clock
/// otherwise.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line.
pub fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. Hand-crafted with ❤️")
}
