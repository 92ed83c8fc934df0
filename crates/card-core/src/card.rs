use crate::config::TiltConfig;
use crate::host::{FrameHost, Surface};
use crate::press::PressTicket;
use crate::state::{CardState, TiltEngine};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct CardInner<S, H: FrameHost> {
    engine: TiltEngine,
    surface: S,
    host: Rc<H>,
    live: bool,
    frame: Option<H::FrameHandle>,
    press_timer: Option<H::TimerHandle>,
}

impl<S: Surface, H: FrameHost> CardInner<S, H> {
    #[inline]
    fn accepts_events(&self) -> bool {
        self.live && self.surface.is_live()
    }

    /// Release the frame handle and press timer. Idempotent.
    fn shutdown(&mut self) {
        self.live = false;
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
        if let Some(handle) = self.press_timer.take() {
            self.host.clear_timeout(handle);
        }
    }
}

/// A mounted surface: owns its engine state and the single frame loop that
/// drives it. Dropping the card unmounts it.
///
/// Host callbacks only hold a weak reference, so a callback that outlives the
/// card finds nothing to do and does not reschedule.
pub struct TiltCard<S: Surface + 'static, H: FrameHost + 'static> {
    inner: Rc<RefCell<CardInner<S, H>>>,
}

impl<S: Surface + 'static, H: FrameHost + 'static> TiltCard<S, H> {
    /// Start tracking `surface`. Returns `None` without acquiring anything if
    /// the surface is not attached.
    pub fn mount(surface: S, host: Rc<H>, config: TiltConfig) -> Option<Self> {
        if !surface.is_live() {
            log::debug!("[card] surface missing at mount; skipping");
            return None;
        }
        let inner = Rc::new(RefCell::new(CardInner {
            engine: TiltEngine::new(config),
            surface,
            host,
            live: true,
            frame: None,
            press_timer: None,
        }));
        schedule_frame(&inner);
        log::debug!("[card] mounted");
        Some(Self { inner })
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        let mut card = self.inner.borrow_mut();
        if !card.accepts_events() {
            return;
        }
        let bounds = card.surface.bounds();
        let sampled = card.engine.pointer_move(bounds, Vec2::new(x, y));
        if let Some(spotlight) = sampled {
            card.surface.set_spotlight(spotlight);
        }
    }

    pub fn pointer_leave(&self) {
        let mut card = self.inner.borrow_mut();
        if card.accepts_events() {
            card.engine.pointer_leave();
        }
    }

    /// Show the pressed style and (re)start the hold window.
    pub fn activate(&self) {
        let mut card = self.inner.borrow_mut();
        if !card.accepts_events() {
            return;
        }
        let (ticket, pressed) = card.engine.activate();
        card.surface.apply_transform(&pressed);
        if let Some(previous) = card.press_timer.take() {
            card.host.clear_timeout(previous);
        }
        let weak = Rc::downgrade(&self.inner);
        let hold_ms = card.engine.config().press_hold_ms;
        let timer = card
            .host
            .set_timeout(Box::new(move || expire_press(&weak, ticket)), hold_ms);
        if timer.is_none() {
            log::warn!("[card] press timer unavailable; releasing immediately");
            card.engine.expire_press(ticket);
        }
        card.press_timer = timer;
    }

    /// Stop the frame loop and drop pending timers. Safe to call repeatedly.
    pub fn unmount(&self) {
        let mut card = self.inner.borrow_mut();
        if card.live {
            card.shutdown();
            log::debug!("[card] unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().live
    }

    pub fn snapshot(&self) -> CardState {
        self.inner.borrow().engine.snapshot()
    }
}

impl<S: Surface + 'static, H: FrameHost + 'static> Drop for TiltCard<S, H> {
    fn drop(&mut self) {
        // A callback may hold a borrow if the card is dropped from inside one.
        if let Ok(mut card) = self.inner.try_borrow_mut() {
            card.shutdown();
        }
    }
}

fn schedule_frame<S: Surface + 'static, H: FrameHost + 'static>(inner: &Rc<RefCell<CardInner<S, H>>>) {
    let weak = Rc::downgrade(inner);
    let host = inner.borrow().host.clone();
    let handle = host.request_frame(Box::new(move || run_frame(&weak)));
    if handle.is_none() {
        log::warn!("[card] frame request refused; animation stopped");
    }
    inner.borrow_mut().frame = handle;
}

fn run_frame<S: Surface + 'static, H: FrameHost + 'static>(weak: &Weak<RefCell<CardInner<S, H>>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    {
        let mut card = inner.borrow_mut();
        card.frame = None;
        if !card.live {
            return;
        }
        if !card.surface.is_live() {
            log::debug!("[card] surface detached; stopping frame loop");
            card.shutdown();
            return;
        }
        let transform = card.engine.tick();
        if let Some(transform) = transform {
            card.surface.apply_transform(&transform);
        }
    }
    schedule_frame(&inner);
}

fn expire_press<S: Surface + 'static, H: FrameHost + 'static>(
    weak: &Weak<RefCell<CardInner<S, H>>>,
    ticket: PressTicket,
) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut card = inner.borrow_mut();
    if !card.live {
        return;
    }
    if card.engine.expire_press(ticket) {
        card.press_timer = None;
    } else {
        log::debug!("[card] stale press expiry ignored");
    }
}
