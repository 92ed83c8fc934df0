#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod mount;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("profile-card-web starting");

    if let Err(e) = mount::mount_all() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Mount (or remount from fresh state) the card element with this id.
/// Resolves to `false` when the element is absent or detached.
#[wasm_bindgen]
pub fn mount_profile_card(id: &str) -> Result<bool, JsValue> {
    mount::mount_by_id(id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

#[wasm_bindgen]
pub fn unmount_profile_card(id: &str) -> bool {
    mount::unmount(id)
}

/// Free cards whose element left the document. Returns how many were freed.
#[wasm_bindgen]
pub fn release_detached_cards() -> usize {
    mount::prune_stopped()
}
