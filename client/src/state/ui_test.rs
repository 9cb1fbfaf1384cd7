use super::*;

// =============================================================
// NavMenu defaults
// =============================================================

#[test]
fn nav_menu_default_is_closed() {
    assert!(!NavMenu::default().is_open());
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_opens_closed_menu() {
    assert!(NavMenu::default().toggled().is_open());
}

#[test]
fn double_toggle_restores_original_visibility() {
    for start in [NavMenu::default(), NavMenu::default().toggled()] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn closed_collapses_open_menu_and_keeps_closed_menu_closed() {
    assert!(!NavMenu::default().toggled().closed().is_open());
    assert!(!NavMenu::default().closed().is_open());
}

#[test]
fn button_label_tracks_visibility() {
    let menu = NavMenu::default();
    assert_eq!(menu.button_label(), "Open menu");
    assert_eq!(menu.toggled().button_label(), "Close menu");
}
