//! Print-to-PDF trigger for the résumé.
//!
//! Opens the host's print dialog. Which sections appear on paper is decided
//! entirely by the `@media print` rules in the stylesheet; this function
//! never touches the DOM, so on-screen visibility is unaffected.
//!
//! TRADE-OFFS
//! ==========
//! Hosts without a `window` or without print support (SSR, some embedded
//! webviews) report `Unavailable` and the click is a no-op.

#[cfg(test)]
#[path = "print_test.rs"]
mod print_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The print dialog was requested from the browser.
    Requested,
    /// No printing capability in this environment.
    Unavailable,
}

impl PrintOutcome {
    pub fn is_available(self) -> bool {
        self == Self::Requested
    }
}

/// Ask the host environment to print the current page.
pub fn print_page() -> PrintOutcome {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return PrintOutcome::Unavailable;
        };
        match window.print() {
            Ok(()) => {
                log::debug!("print dialog requested");
                PrintOutcome::Requested
            }
            Err(err) => {
                log::warn!("print unavailable: {err:?}");
                PrintOutcome::Unavailable
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        PrintOutcome::Unavailable
    }
}
