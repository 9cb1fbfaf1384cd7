use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_recognizes_each_scheme() {
    assert_eq!(classify("#contact"), Some(LinkKind::Anchor));
    assert_eq!(classify("mailto:a@b.co"), Some(LinkKind::Mail));
    assert_eq!(classify("tel:+911234567"), Some(LinkKind::Tel));
    assert_eq!(classify("https://github.com/x"), Some(LinkKind::Web));
    assert_eq!(classify("http://example.com"), Some(LinkKind::Web));
}

#[test]
fn classify_rejects_relative_and_unknown_schemes() {
    assert_eq!(classify("/profile/photo.png"), None);
    assert_eq!(classify("ftp://example.com"), None);
    assert_eq!(classify(""), None);
}

// =============================================================
// new-tab attributes
// =============================================================

#[test]
fn web_links_get_blank_target_and_noopener() {
    assert_eq!(target_for("https://github.com/pavanpavaman"), Some("_blank"));
    assert_eq!(rel_for("https://github.com/pavanpavaman"), Some("noopener noreferrer"));
}

#[test]
fn mail_tel_and_anchor_links_stay_in_place() {
    for href in ["mailto:a@b.co", "tel:+911234567", "#resume"] {
        assert!(!opens_new_tab(href));
        assert_eq!(target_for(href), None);
        assert_eq!(rel_for(href), None);
    }
}

// =============================================================
// is_well_formed
// =============================================================

#[test]
fn well_formed_accepts_valid_links() {
    assert!(is_well_formed("#home"));
    assert!(is_well_formed("mailto:pavandhanush9581@gmail.com"));
    assert!(is_well_formed("tel:+919381238714"));
    assert!(is_well_formed("https://github.com/pavanpavaman"));
}

#[test]
fn well_formed_rejects_broken_mail() {
    assert!(!is_well_formed("mailto:"));
    assert!(!is_well_formed("mailto:no-at-sign.com"));
    assert!(!is_well_formed("mailto:a@b"));
    assert!(!is_well_formed("mailto:a@@b.com"));
    assert!(!is_well_formed("mailto:a@b..com"));
    assert!(!is_well_formed("mailto:a b@c.com"));
}

#[test]
fn well_formed_rejects_broken_tel() {
    assert!(!is_well_formed("tel:"));
    assert!(!is_well_formed("tel:+91 93812"));
    assert!(!is_well_formed("tel:12345"));
    assert!(!is_well_formed("tel:+91abc45678"));
}

#[test]
fn well_formed_rejects_broken_web_and_anchor() {
    assert!(!is_well_formed("https://"));
    assert!(!is_well_formed("https://localhost"));
    assert!(!is_well_formed("https://github.com/a b"));
    assert!(!is_well_formed("#"));
    assert!(!is_well_formed("# home"));
    assert!(!is_well_formed("github.com/pavanpavaman"));
}

#[test]
fn unlinked_and_wellformed_contacts_pass_the_card_check() {
    use crate::content::contact::CONTACTS;
    assert!(CONTACTS.iter().all(|c| c.href.is_none_or(is_well_formed)));
}
