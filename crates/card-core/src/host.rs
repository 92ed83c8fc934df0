//! Seams to the environment hosting the card: the surface being animated and
//! the frame/timer scheduling primitives.

use crate::sampler::{SpotlightPosition, SurfaceBounds};
use crate::transform::CardTransform;

/// Zero-argument callback handed to the host for a single later invocation.
pub type HostCallback = Box<dyn FnOnce()>;

/// The visual element being tilted.
pub trait Surface {
    /// Whether the element is still attached and safe to write to.
    fn is_live(&self) -> bool;
    /// Current bounding rectangle in viewport pixels. Not cached.
    fn bounds(&self) -> SurfaceBounds;
    /// Replace the element's transform. Must not accumulate state.
    fn apply_transform(&self, transform: &CardTransform);
    fn set_spotlight(&self, spotlight: SpotlightPosition);
}

/// Display-frame and timer scheduling. Each request fires at most once and
/// may be cancelled before it fires. `None` means the host refused the
/// request; callers degrade gracefully.
pub trait FrameHost {
    type FrameHandle;
    type TimerHandle;

    fn request_frame(&self, callback: HostCallback) -> Option<Self::FrameHandle>;
    fn cancel_frame(&self, handle: Self::FrameHandle);
    fn set_timeout(&self, callback: HostCallback, delay_ms: u32) -> Option<Self::TimerHandle>;
    fn clear_timeout(&self, handle: Self::TimerHandle);
}
