pub mod binding;
pub mod components;
pub mod dom;
pub mod hooks;

use wasm_bindgen::prelude::*;

pub use binding::{attach, make_zoomable, make_zoomable_with_config, ZoomableHandle};
pub use components::Zoomable;
pub use dom::DomSurface;
pub use hooks::{use_zoomable, ZoomControls};

/// Install the panic hook and route `log` output to the browser console.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
