//! Pointer sampling: raw pointer coordinates to tilt target and spotlight.

use glam::Vec2;

/// Bounding rectangle of the tracked surface in viewport pixels.
///
/// Queried fresh for every sample so layout shifts are picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Zero or negative extents (collapsed or hidden element).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Rotation the card is heading towards, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltTarget {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

/// Spotlight centre relative to the surface's top-left corner, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpotlightPosition {
    pub x: f32,
    pub y: f32,
}

/// Result of sampling one pointer position against the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub target: TiltTarget,
    pub spotlight: SpotlightPosition,
}

/// Map a pointer position to a tilt target and spotlight.
///
/// The offset from centre is divided by the full extent and scaled by
/// `max_tilt_deg`. Right of centre raises `rotate_y`; above centre raises
/// `rotate_x`. Nothing is clamped, so a pointer outside the rectangle can
/// briefly push past the on-surface range. Returns `None` for degenerate
/// bounds.
pub fn sample_pointer(bounds: SurfaceBounds, pointer: Vec2, max_tilt_deg: f32) -> Option<PointerSample> {
    if bounds.is_degenerate() {
        return None;
    }
    let offset = pointer - bounds.center();
    let target = TiltTarget {
        rotate_x: -(offset.y / bounds.height) * max_tilt_deg,
        rotate_y: (offset.x / bounds.width) * max_tilt_deg,
    };
    let local = pointer - bounds.origin();
    Some(PointerSample {
        target,
        spotlight: SpotlightPosition {
            x: local.x,
            y: local.y,
        },
    })
}
