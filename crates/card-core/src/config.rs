//! Tuning knobs for a single card.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Degrees of rotation per full surface width (or height) of offset.
    pub max_tilt_deg: f32,
    /// First-order filter coefficient applied once per frame.
    pub smoothing: f32,
    /// Pressed window length after the most recent activation.
    pub press_hold_ms: u32,
    pub perspective_px: f32,
    pub pressed_scale: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: MAX_TILT_DEG,
            smoothing: SMOOTHING_FACTOR,
            press_hold_ms: PRESS_HOLD_MS,
            perspective_px: PERSPECTIVE_PX,
            pressed_scale: PRESSED_SCALE,
        }
    }
}

impl TiltConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_tilt_deg.is_finite() || self.max_tilt_deg < 0.0 {
            return Err(ConfigError::MaxTilt(self.max_tilt_deg));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(self.smoothing));
        }
        if self.press_hold_ms == 0 {
            return Err(ConfigError::PressHold);
        }
        if !self.perspective_px.is_finite() || self.perspective_px <= 0.0 {
            return Err(ConfigError::Perspective(self.perspective_px));
        }
        if !(self.pressed_scale > 0.0 && self.pressed_scale <= 1.0) {
            return Err(ConfigError::PressedScale(self.pressed_scale));
        }
        Ok(())
    }

    /// Apply a single textual override, e.g. one read from a data attribute.
    ///
    /// Unknown keys are ignored so markup can carry attributes meant for
    /// other consumers.
    pub fn set_from_str(&mut self, key: &'static str, value: &str) -> Result<(), ConfigError> {
        let parse_err = || ConfigError::Parse {
            attr: key,
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "tilt-max" => self.max_tilt_deg = value.parse().map_err(|_| parse_err())?,
            "tilt-smoothing" => self.smoothing = value.parse().map_err(|_| parse_err())?,
            "press-ms" => self.press_hold_ms = value.parse().map_err(|_| parse_err())?,
            "tilt-perspective" => self.perspective_px = value.parse().map_err(|_| parse_err())?,
            "press-scale" => self.pressed_scale = value.parse().map_err(|_| parse_err())?,
            _ => {}
        }
        Ok(())
    }

    /// Build a config from `(key, value)` overrides, falling back to the
    /// default for every override that fails to parse or validate.
    pub fn from_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'a str)>,
    {
        let mut cfg = Self::default();
        for (key, value) in overrides {
            let mut candidate = cfg;
            match candidate
                .set_from_str(key, value)
                .and_then(|_| candidate.validate())
            {
                Ok(()) => cfg = candidate,
                Err(e) => log::warn!("[config] ignoring {key}: {e}"),
            }
        }
        cfg
    }
}
