use crate::sampler::TiltTarget;

/// Smoothed rotation actually applied to the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderedTilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl RenderedTilt {
    /// Advance one frame of the first-order filter towards `target`.
    #[inline]
    pub fn step(&mut self, target: TiltTarget, smoothing: f32) {
        self.rotate_x += (target.rotate_x - self.rotate_x) * smoothing;
        self.rotate_y += (target.rotate_y - self.rotate_y) * smoothing;
    }

    #[inline]
    pub fn distance_to(&self, target: TiltTarget) -> f32 {
        let dx = target.rotate_x - self.rotate_x;
        let dy = target.rotate_y - self.rotate_y;
        (dx * dx + dy * dy).sqrt()
    }
}
