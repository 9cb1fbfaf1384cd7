//! Href classification for outbound and in-page links.
//!
//! HTTP(S) targets open in a new tab with `noopener noreferrer`; `mailto:`,
//! `tel:` and fragment links stay in the current browsing context.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

pub const NEW_TAB_TARGET: &str = "_blank";
pub const NEW_TAB_REL: &str = "noopener noreferrer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// `#section` fragment on the same page.
    Anchor,
    /// `mailto:` address.
    Mail,
    /// `tel:` number.
    Tel,
    /// `http://` or `https://` URL.
    Web,
}

/// Classify an href by scheme. Returns `None` for anything unrecognized.
pub fn classify(href: &str) -> Option<LinkKind> {
    if href.starts_with('#') {
        Some(LinkKind::Anchor)
    } else if href.starts_with("mailto:") {
        Some(LinkKind::Mail)
    } else if href.starts_with("tel:") {
        Some(LinkKind::Tel)
    } else if href.starts_with("https://") || href.starts_with("http://") {
        Some(LinkKind::Web)
    } else {
        None
    }
}

pub fn opens_new_tab(href: &str) -> bool {
    classify(href) == Some(LinkKind::Web)
}

/// `target` attribute for an href, if it needs one.
pub fn target_for(href: &str) -> Option<&'static str> {
    opens_new_tab(href).then_some(NEW_TAB_TARGET)
}

/// `rel` attribute for an href, if it needs one.
pub fn rel_for(href: &str) -> Option<&'static str> {
    opens_new_tab(href).then_some(NEW_TAB_REL)
}

/// Structural check of an href's payload for its scheme.
///
/// - anchor: non-empty id without whitespace
/// - mail: `local@domain.tld`
/// - tel: optional leading `+`, then at least seven digits
/// - web: non-empty host without whitespace
pub fn is_well_formed(href: &str) -> bool {
    match classify(href) {
        Some(LinkKind::Anchor) => {
            let id = &href[1..];
            !id.is_empty() && !id.contains(char::is_whitespace)
        }
        Some(LinkKind::Mail) => is_email(&href["mailto:".len()..]),
        Some(LinkKind::Tel) => is_phone(&href["tel:".len()..]),
        Some(LinkKind::Web) => {
            let rest = href.split_once("://").map_or("", |(_, rest)| rest);
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty() && host.contains('.') && !href.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !address.contains(char::is_whitespace)
}

fn is_phone(number: &str) -> bool {
    let digits = number.strip_prefix('+').unwrap_or(number);
    digits.len() >= 7 && digits.chars().all(|c| c.is_ascii_digit())
}
