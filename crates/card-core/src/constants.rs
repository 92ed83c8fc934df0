/// Default tuning for the card's tilt, smoothing and press feedback.
///
/// These express intended behavior (maximum angles, filter strength, hold
/// durations) and keep magic numbers out of the engine.
// Degrees of rotation per full surface extent of pointer offset from centre
pub const MAX_TILT_DEG: f32 = 20.0;

// Fraction of the remaining distance to target closed per frame
pub const SMOOTHING_FACTOR: f32 = 0.1;

// How long the pressed style holds after the last activation
pub const PRESS_HOLD_MS: u32 = 300;

// CSS perspective depth applied with every transform (px)
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Scale applied while pressed
pub const PRESSED_SCALE: f32 = 0.95;

// Decimal places kept when formatting CSS numbers
pub const CSS_DECIMALS: usize = 3;
