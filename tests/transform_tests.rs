// Host-side tests for CSS transform rendering.

use card_core::*;

#[test]
fn tilt_renders_perspective_and_rotation() {
    let t = CardTransform::Tilt {
        rotate_x_deg: 5.0,
        rotate_y_deg: -2.5,
        perspective_px: 1000.0,
    };
    assert_eq!(
        t.to_css(),
        "perspective(1000px) rotateX(5deg) rotateY(-2.5deg)"
    );
}

#[test]
fn pressed_renders_scale() {
    let t = CardTransform::Pressed {
        scale: 0.95,
        perspective_px: 1000.0,
    };
    assert_eq!(t.to_css(), "perspective(1000px) scale(0.95)");
}

#[test]
fn numbers_are_trimmed_and_rounded() {
    assert_eq!(css_number(0.0), "0");
    assert_eq!(css_number(-0.0), "0");
    assert_eq!(css_number(-0.0001), "0");
    assert_eq!(css_number(1.23456), "1.235");
    assert_eq!(css_number(12.5), "12.5");
    assert_eq!(css_number(300.0), "300");
}
