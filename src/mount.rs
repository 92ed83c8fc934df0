use crate::constants::CARD_SELECTOR;
use crate::dom::{self, DomSurface};
use crate::events::pointer::PointerListeners;
use crate::frame::WebFrameHost;
use card_core::{CardRegistry, Mounted, TiltCard};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebCard = TiltCard<DomSurface, WebFrameHost>;

/// A card plus the listeners feeding it.
struct MountedCard {
    // Held for its Drop, which removes the listeners from the element.
    _listeners: PointerListeners,
    card: Rc<WebCard>,
}

impl Mounted for MountedCard {
    fn is_mounted(&self) -> bool {
        self.card.is_mounted()
    }
}

impl Drop for MountedCard {
    fn drop(&mut self) {
        self.card.unmount();
    }
}

thread_local! {
    static CARDS: RefCell<CardRegistry<MountedCard>> = RefCell::new(CardRegistry::default());
}

/// Release cards that stopped themselves because their element went away.
pub fn prune_stopped() -> usize {
    let released = CARDS.with(|cards| cards.borrow_mut().prune());
    let count = released.len();
    drop(released);
    if count > 0 {
        log::info!("[mount] released {count} detached card(s)");
    }
    count
}

/// Mount every element matching the card selector. Returns how many mounted.
pub fn mount_all() -> anyhow::Result<usize> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let nodes = document
        .query_selector_all(CARD_SELECTOR)
        .map_err(|e| anyhow::anyhow!("query {CARD_SELECTOR}: {:?}", e))?;
    prune_stopped();
    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let key = if el.id().is_empty() {
            format!("{CARD_SELECTOR}#{i}")
        } else {
            el.id()
        };
        match mount_element(key, el) {
            Ok(true) => mounted += 1,
            Ok(false) => {}
            Err(e) => log::error!("[mount] card {i} skipped: {:?}", e),
        }
    }
    log::info!("[mount] {} profile card(s) active", mounted);
    Ok(mounted)
}

pub fn mount_by_id(id: &str) -> anyhow::Result<bool> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("[mount] missing #{id}");
        unmount(id);
        return Ok(false);
    };
    let el = el
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    mount_element(id.to_string(), el)
}

/// Tear down the card registered under `key`. Returns whether one existed.
pub fn unmount(key: &str) -> bool {
    let removed = CARDS.with(|cards| cards.borrow_mut().remove(key));
    let existed = removed.is_some();
    drop(removed);
    if existed {
        log::info!("[mount] unmounted {key}");
    }
    existed
}

fn mount_element(key: String, el: web::HtmlElement) -> anyhow::Result<bool> {
    // A remount always starts from fresh state.
    unmount(&key);

    let host = Rc::new(WebFrameHost::new().ok_or_else(|| anyhow::anyhow!("no window"))?);
    let config = dom::read_config(&el);
    let Some(card) = TiltCard::mount(DomSurface::new(el.clone()), host, config) else {
        return Ok(false);
    };
    let card = Rc::new(card);
    let listeners = PointerListeners::wire(&el, &card)?;
    log::info!("[mount] mounted {key}");
    let released = CARDS.with(|cards| {
        cards.borrow_mut().insert(
            key,
            MountedCard {
                _listeners: listeners,
                card,
            },
        )
    });
    drop(released);
    Ok(true)
}
