use crate::constants::{CONFIG_ATTRS, SPOTLIGHT_X_VAR, SPOTLIGHT_Y_VAR};
use card_core::{css_number, CardTransform, SpotlightPosition, Surface, SurfaceBounds, TiltConfig};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// The card element as seen by the engine.
pub struct DomSurface {
    element: web::HtmlElement,
}

impl DomSurface {
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl Surface for DomSurface {
    fn is_live(&self) -> bool {
        self.element.is_connected()
    }

    fn bounds(&self) -> SurfaceBounds {
        let rect = self.element.get_bounding_client_rect();
        SurfaceBounds::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn apply_transform(&self, transform: &CardTransform) {
        _ = self
            .element
            .style()
            .set_property("transform", &transform.to_css());
    }

    fn set_spotlight(&self, spotlight: SpotlightPosition) {
        let style = self.element.style();
        _ = style.set_property(SPOTLIGHT_X_VAR, &format!("{}px", css_number(spotlight.x)));
        _ = style.set_property(SPOTLIGHT_Y_VAR, &format!("{}px", css_number(spotlight.y)));
    }
}

/// Read `data-*` tuning overrides; bad values fall back to defaults.
pub fn read_config(element: &web::Element) -> TiltConfig {
    let overrides: Vec<(&'static str, String)> = CONFIG_ATTRS
        .iter()
        .filter_map(|(key, attr)| element.get_attribute(attr).map(|v| (*key, v)))
        .collect();
    TiltConfig::from_overrides(overrides.iter().map(|(k, v)| (*k, v.as_str())))
}
