use card_core::{FrameHost, HostCallback};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` / `setTimeout` backed scheduling.
///
/// Callbacks are handed to JS with `Closure::once_into_js`, which frees the
/// closure after its single invocation. A request cancelled before it fires
/// leaves its closure allocated.
pub struct WebFrameHost {
    window: web::Window,
}

impl WebFrameHost {
    pub fn new() -> Option<Self> {
        web::window().map(|window| Self { window })
    }
}

impl FrameHost for WebFrameHost {
    type FrameHandle = i32;
    type TimerHandle = i32;

    fn request_frame(&self, callback: HostCallback) -> Option<i32> {
        let js = Closure::once_into_js(move || callback());
        self.window
            .request_animation_frame(js.unchecked_ref::<js_sys::Function>())
            .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
            .ok()
    }

    fn cancel_frame(&self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn set_timeout(&self, callback: HostCallback, delay_ms: u32) -> Option<i32> {
        let js = Closure::once_into_js(move || callback());
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                js.unchecked_ref::<js_sys::Function>(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| log::error!("setTimeout failed: {:?}", e))
            .ok()
    }

    fn clear_timeout(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
