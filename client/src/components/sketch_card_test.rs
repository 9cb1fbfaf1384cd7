use super::*;

#[test]
fn alternating_rotation_flips_sign_by_index() {
    assert_eq!(alternating_rotation(0, -1.0), -1.0);
    assert_eq!(alternating_rotation(1, -1.0), 1.0);
    assert_eq!(alternating_rotation(2, -1.0), -1.0);
    assert_eq!(alternating_rotation(3, 1.0), -1.0);
}

#[test]
fn hover_rotation_adds_one_degree_either_way() {
    assert_eq!(hover_rotation(1.0, true), 2.0);
    assert_eq!(hover_rotation(1.0, false), 0.0);
    assert_eq!(hover_rotation(-1.0, false), -2.0);
}

#[test]
fn card_transform_at_rest_uses_base_rotation() {
    assert_eq!(card_transform(-1.0, None), "transform: rotate(-1deg);");
    assert_eq!(card_transform(0.0, None), "transform: rotate(0deg);");
}

#[test]
fn card_transform_while_hovered_scales_and_tilts() {
    assert_eq!(card_transform(1.0, Some(2.0)), "transform: rotate(2deg) scale(1.02);");
}
