use thiserror::Error;

/// Rejected tuning values for [`crate::TiltConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max tilt must be a finite, non-negative angle (got {0})")]
    MaxTilt(f32),
    #[error("smoothing factor must be in (0, 1] (got {0})")]
    Smoothing(f32),
    #[error("press hold must be longer than 0ms")]
    PressHold,
    #[error("perspective must be a positive length (got {0})")]
    Perspective(f32),
    #[error("pressed scale must be in (0, 1] (got {0})")]
    PressedScale(f32),
    #[error("could not parse `{attr}` value `{value}`")]
    Parse { attr: &'static str, value: String },
}
