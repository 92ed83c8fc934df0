// DOM hooks shared by the web binding.

// Elements matching this are mounted automatically on start
pub const CARD_SELECTOR: &str = "[data-profile-card]";

// Spotlight position is published as CSS custom properties (px)
pub const SPOTLIGHT_X_VAR: &str = "--spotlight-x";
pub const SPOTLIGHT_Y_VAR: &str = "--spotlight-y";

// Per-element tuning overrides: (config key, attribute name)
pub const CONFIG_ATTRS: [(&str, &str); 5] = [
    ("tilt-max", "data-tilt-max"),
    ("tilt-smoothing", "data-tilt-smoothing"),
    ("press-ms", "data-press-ms"),
    ("tilt-perspective", "data-tilt-perspective"),
    ("press-scale", "data-press-scale"),
];
