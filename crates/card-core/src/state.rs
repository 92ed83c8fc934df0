//! Per-surface animation state and the pure transitions over it.

use crate::config::TiltConfig;
use crate::press::{PressDebounce, PressState, PressTicket};
use crate::sampler::{sample_pointer, SpotlightPosition, SurfaceBounds, TiltTarget};
use crate::smoothing::RenderedTilt;
use crate::transform::CardTransform;
use glam::Vec2;

/// Copy of everything the engine tracks, for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardState {
    pub target: TiltTarget,
    pub rendered: RenderedTilt,
    pub spotlight: SpotlightPosition,
    pub press: PressState,
}

/// Owns the tilt target, rendered tilt, spotlight and press flag of a single
/// surface. All mutation goes through the event methods below; nothing here
/// touches the host.
#[derive(Clone, Debug)]
pub struct TiltEngine {
    config: TiltConfig,
    target: TiltTarget,
    rendered: RenderedTilt,
    spotlight: SpotlightPosition,
    press: PressDebounce,
}

impl TiltEngine {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            target: TiltTarget::default(),
            rendered: RenderedTilt::default(),
            spotlight: SpotlightPosition::default(),
            press: PressDebounce::default(),
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn snapshot(&self) -> CardState {
        CardState {
            target: self.target,
            rendered: self.rendered,
            spotlight: self.spotlight,
            press: self.press.state(),
        }
    }

    /// Update target and spotlight from a pointer sample. Returns the new
    /// spotlight, or `None` when the bounds are degenerate and nothing changed.
    pub fn pointer_move(&mut self, bounds: SurfaceBounds, pointer: Vec2) -> Option<SpotlightPosition> {
        let sample = sample_pointer(bounds, pointer, self.config.max_tilt_deg)?;
        self.target = sample.target;
        self.spotlight = sample.spotlight;
        Some(sample.spotlight)
    }

    /// Relax towards neutral. The spotlight stays where it was.
    pub fn pointer_leave(&mut self) {
        self.target = TiltTarget::default();
    }

    /// Advance one frame. The rendered tilt always moves; the returned
    /// transform is `None` while pressed so the pressed style is left alone.
    pub fn tick(&mut self) -> Option<CardTransform> {
        self.rendered.step(self.target, self.config.smoothing);
        if self.press.is_pressed() {
            return None;
        }
        Some(CardTransform::Tilt {
            rotate_x_deg: self.rendered.rotate_x,
            rotate_y_deg: self.rendered.rotate_y,
            perspective_px: self.config.perspective_px,
        })
    }

    pub fn activate(&mut self) -> (PressTicket, CardTransform) {
        let ticket = self.press.activate();
        let pressed = CardTransform::Pressed {
            scale: self.config.pressed_scale,
            perspective_px: self.config.perspective_px,
        };
        (ticket, pressed)
    }

    pub fn expire_press(&mut self, ticket: PressTicket) -> bool {
        self.press.expire(ticket)
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.press.is_pressed()
    }
}
