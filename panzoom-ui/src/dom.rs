// panzoom-ui/src/dom.rs
use panzoom_core::{Rect, StyleHost, StyleProperty, Target};
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

/// [`StyleHost`] backed by live DOM elements.
///
/// Writes go to the inline style; reads go through `getComputedStyle`, which
/// forces the browser to resolve percentages to pixels synchronously.
pub struct DomSurface {
    window: Window,
    viewport: HtmlElement,
    surface: HtmlElement,
}

impl DomSurface {
    pub fn new(viewport: HtmlElement, surface: HtmlElement) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        Ok(Self {
            window,
            viewport,
            surface,
        })
    }

    pub fn viewport(&self) -> &HtmlElement {
        &self.viewport
    }

    pub fn surface(&self) -> &HtmlElement {
        &self.surface
    }

    /// Browser user-agent string, empty if the navigator refuses to report one.
    pub fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }

    fn element(&self, target: Target) -> &HtmlElement {
        match target {
            Target::Viewport => &self.viewport,
            Target::Surface => &self.surface,
        }
    }
}

impl StyleHost for DomSurface {
    fn set_style(&mut self, target: Target, property: StyleProperty, value: &str) {
        if let Err(e) = self
            .element(target)
            .style()
            .set_property(property.as_css(), value)
        {
            log::warn!(
                "Failed to set {}: {} on {:?}: {:?}",
                property.as_css(),
                value,
                target,
                e
            );
        }
    }

    fn computed_style(&self, target: Target, property: StyleProperty) -> Option<String> {
        let style = self
            .window
            .get_computed_style(self.element(target))
            .ok()??;
        style.get_property_value(property.as_css()).ok()
    }

    fn bounding_box(&self, target: Target) -> Rect {
        let rect = self.element(target).get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}
