use super::*;

#[test]
fn every_icon_has_svg_markup() {
    for kind in IconKind::ALL {
        let body = kind.svg_body();
        assert!(body.starts_with('<'), "{kind:?} body should start with a tag");
        assert!(body.ends_with("/>"), "{kind:?} body should end with a self-closing tag");
    }
}

#[test]
fn icon_bodies_are_distinct() {
    for (i, a) in IconKind::ALL.iter().enumerate() {
        for b in &IconKind::ALL[i + 1..] {
            assert_ne!(a.svg_body(), b.svg_body(), "{a:?} and {b:?} share markup");
        }
    }
}

#[test]
fn icon_bodies_stay_inside_the_svg_element() {
    for kind in IconKind::ALL {
        assert!(!kind.svg_body().contains("<svg"), "{kind:?} must not nest an svg root");
    }
}
