// Deterministic stand-ins for the browser: a manual frame queue, a virtual
// millisecond clock for timers and a surface that records every write.

#![allow(dead_code)]
use card_core::{
    CardTransform, FrameHost, HostCallback, SpotlightPosition, Surface, SurfaceBounds,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
pub struct FakeHost {
    now_ms: Cell<u64>,
    next_id: Cell<u32>,
    frames: RefCell<Vec<(u32, HostCallback)>>,
    timers: RefCell<Vec<(u32, u64, HostCallback)>>,
    pub refuse_timers: Cell<bool>,
    /// Simulates a frame callback already dequeued when cancel arrives.
    pub ignore_cancel: Cell<bool>,
    pub frames_requested: Cell<usize>,
}

impl FakeHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn issue_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Fire every frame callback queued so far. Callbacks queued while the
    /// batch runs wait for the next call. Returns how many fired.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.frames.borrow_mut());
        let fired = batch.len();
        for (_, callback) in batch {
            callback();
        }
        fired
    }

    pub fn run_frames(&self, n: usize) {
        for _ in 0..n {
            self.run_frame();
        }
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let earliest = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (_, due, _))| *due <= until)
                    .min_by_key(|(_, (_, due, _))| *due)
                    .map(|(i, _)| i);
                earliest.map(|i| timers.remove(i))
            };
            let Some((_, due, callback)) = next else {
                break;
            };
            self.now_ms.set(due);
            callback();
        }
        self.now_ms.set(until);
    }
}

impl FrameHost for FakeHost {
    type FrameHandle = u32;
    type TimerHandle = u32;

    fn request_frame(&self, callback: HostCallback) -> Option<u32> {
        let id = self.issue_id();
        self.frames_requested.set(self.frames_requested.get() + 1);
        self.frames.borrow_mut().push((id, callback));
        Some(id)
    }

    fn cancel_frame(&self, handle: u32) {
        if self.ignore_cancel.get() {
            return;
        }
        self.frames.borrow_mut().retain(|(id, _)| *id != handle);
    }

    fn set_timeout(&self, callback: HostCallback, delay_ms: u32) -> Option<u32> {
        if self.refuse_timers.get() {
            return None;
        }
        let id = self.issue_id();
        let due = self.now_ms.get() + delay_ms as u64;
        self.timers.borrow_mut().push((id, due, callback));
        Some(id)
    }

    fn clear_timeout(&self, handle: u32) {
        self.timers.borrow_mut().retain(|(id, _, _)| *id != handle);
    }
}

/// Surface whose state is shared with the test through `Rc` handles.
#[derive(Clone)]
pub struct RecordingSurface {
    pub live: Rc<Cell<bool>>,
    pub bounds: Rc<Cell<SurfaceBounds>>,
    pub applied: Rc<RefCell<Vec<CardTransform>>>,
    pub spotlights: Rc<RefCell<Vec<SpotlightPosition>>>,
}

impl RecordingSurface {
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self {
            live: Rc::new(Cell::new(true)),
            bounds: Rc::new(Cell::new(bounds)),
            applied: Rc::new(RefCell::new(Vec::new())),
            spotlights: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn square(size: f32) -> Self {
        Self::new(SurfaceBounds::new(0.0, 0.0, size, size))
    }

    pub fn last_applied(&self) -> Option<CardTransform> {
        self.applied.borrow().last().copied()
    }

    pub fn applied_count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl Surface for RecordingSurface {
    fn is_live(&self) -> bool {
        self.live.get()
    }

    fn bounds(&self) -> SurfaceBounds {
        self.bounds.get()
    }

    fn apply_transform(&self, transform: &CardTransform) {
        self.applied.borrow_mut().push(*transform);
    }

    fn set_spotlight(&self, spotlight: SpotlightPosition) {
        self.spotlights.borrow_mut().push(spotlight);
    }
}
