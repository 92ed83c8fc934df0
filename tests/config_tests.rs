// Host-side tests for tuning defaults and overrides.

use card_core::*;

#[test]
fn defaults_match_documented_tuning() {
    let cfg = TiltConfig::default();
    assert_eq!(cfg.max_tilt_deg, 20.0);
    assert_eq!(cfg.smoothing, 0.1);
    assert_eq!(cfg.press_hold_ms, 300);
    assert!(cfg.validate().is_ok());
}

#[test]
fn validation_rejects_out_of_range_values() {
    let base = TiltConfig::default();
    let cases = [
        TiltConfig { max_tilt_deg: -1.0, ..base },
        TiltConfig { max_tilt_deg: f32::NAN, ..base },
        TiltConfig { smoothing: 0.0, ..base },
        TiltConfig { smoothing: 1.5, ..base },
        TiltConfig { press_hold_ms: 0, ..base },
        TiltConfig { perspective_px: 0.0, ..base },
        TiltConfig { pressed_scale: 1.2, ..base },
    ];
    for cfg in cases {
        assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
    }
    assert_eq!(
        TiltConfig { press_hold_ms: 0, ..base }.validate(),
        Err(ConfigError::PressHold)
    );
}

#[test]
fn overrides_are_applied() {
    let cfg = TiltConfig::from_overrides([
        ("tilt-max", "12"),
        ("tilt-smoothing", " 0.25 "),
        ("press-ms", "450"),
        ("tilt-perspective", "800"),
        ("press-scale", "0.9"),
    ]);
    assert_eq!(cfg.max_tilt_deg, 12.0);
    assert_eq!(cfg.smoothing, 0.25);
    assert_eq!(cfg.press_hold_ms, 450);
    assert_eq!(cfg.perspective_px, 800.0);
    assert_eq!(cfg.pressed_scale, 0.9);
}

#[test]
fn bad_overrides_fall_back_individually() {
    let cfg = TiltConfig::from_overrides([
        ("tilt-max", "steep"),
        ("tilt-smoothing", "2"),
        ("press-ms", "120"),
        ("unrelated", "x"),
    ]);
    let default = TiltConfig::default();
    assert_eq!(cfg.max_tilt_deg, default.max_tilt_deg);
    assert_eq!(cfg.smoothing, default.smoothing);
    assert_eq!(cfg.press_hold_ms, 120);
}

#[test]
fn parse_error_names_the_attribute() {
    let mut cfg = TiltConfig::default();
    let err = cfg.set_from_str("press-ms", "-3").unwrap_err();
    assert_eq!(
        err,
        ConfigError::Parse {
            attr: "press-ms",
            value: "-3".into()
        }
    );
    assert!(err.to_string().contains("press-ms"));
}
