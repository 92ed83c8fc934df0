use crate::mount::WebCard;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type PointerClosure = Closure<dyn FnMut(web::PointerEvent)>;

/// Pointer listeners attached to one card element. Dropping the set removes
/// every listener from the element.
pub struct PointerListeners {
    target: web::HtmlElement,
    closures: Vec<(&'static str, PointerClosure)>,
}

impl PointerListeners {
    pub fn wire(element: &web::HtmlElement, card: &Rc<WebCard>) -> anyhow::Result<Self> {
        let mut listeners = Self {
            target: element.clone(),
            closures: Vec::with_capacity(3),
        };
        listeners.add("pointermove", pointermove(card.clone()))?;
        listeners.add("pointerleave", pointerleave(card.clone()))?;
        listeners.add("pointerdown", pointerdown(card.clone()))?;
        Ok(listeners)
    }

    fn add(&mut self, event: &'static str, closure: PointerClosure) -> anyhow::Result<()> {
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {event} listener: {:?}", e))?;
        self.closures.push((event, closure));
        Ok(())
    }
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for (event, closure) in self.closures.drain(..) {
            _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}

fn pointermove(card: Rc<WebCard>) -> PointerClosure {
    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        card.pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>)
}

fn pointerleave(card: Rc<WebCard>) -> PointerClosure {
    Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        card.pointer_leave();
    }) as Box<dyn FnMut(_)>)
}

fn pointerdown(card: Rc<WebCard>) -> PointerClosure {
    Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        card.activate();
    }) as Box<dyn FnMut(_)>)
}
