// panzoom-ui/src/binding.rs
//! Wires DOM events on a viewport element to a [`GestureController`].

use std::cell::RefCell;
use std::rc::Rc;

use panzoom_core::{GestureController, GestureEvent, InteractionState, Point, ZoomConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, HtmlElement, MouseEvent, TouchEvent, WheelEvent};

use crate::dom::DomSurface;

/// DOM events the viewport listens to. `touchcancel` ends a touch gesture like `touchend`.
const LISTENED_EVENTS: [&str; 9] = [
    "wheel",
    "mousedown",
    "mousemove",
    "mouseup",
    "mouseleave",
    "touchstart",
    "touchmove",
    "touchend",
    "touchcancel",
];

/// Called after every handled event with the controller's new state.
pub type StateObserver = Rc<dyn Fn(InteractionState)>;

struct Session {
    controller: GestureController,
    dom: DomSurface,
    observer: Option<StateObserver>,
}

struct Listener {
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Keeps a zoomable element pair alive. Dropping it removes the listeners.
#[wasm_bindgen]
pub struct ZoomableHandle {
    session: Rc<RefCell<Session>>,
    viewport: HtmlElement,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl ZoomableHandle {
    /// Clear the interaction state. Call before tearing the surface down.
    pub fn reset(&self) {
        self.session.borrow_mut().controller.reset();
    }

    /// Unregister every listener. The handle stays usable for `reset`.
    pub fn detach(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = self.viewport.remove_event_listener_with_callback(
                listener.kind,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }

    #[wasm_bindgen(js_name = isAttached)]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Current state as JSON, for debugging from JS.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.state()).unwrap_or_default()
    }
}

impl ZoomableHandle {
    pub fn state(&self) -> InteractionState {
        self.session.borrow().controller.state()
    }
}

impl Drop for ZoomableHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Make `surface` pan/zoomable inside `viewport` with the default configuration.
#[wasm_bindgen(js_name = makeZoomable)]
pub fn make_zoomable(
    viewport: HtmlElement,
    surface: HtmlElement,
) -> Result<ZoomableHandle, JsValue> {
    attach(viewport, surface, GestureController::new(), None)
}

/// Like [`make_zoomable`], with a JSON `ZoomConfig` (missing fields use defaults).
#[wasm_bindgen(js_name = makeZoomableWithConfig)]
pub fn make_zoomable_with_config(
    viewport: HtmlElement,
    surface: HtmlElement,
    config_json: &str,
) -> Result<ZoomableHandle, JsValue> {
    let config =
        ZoomConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let controller =
        GestureController::with_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    attach(viewport, surface, controller, None)
}

/// Style the element pair and register one listener per gesture event on `viewport`.
///
/// Not guarded against being called twice on the same elements.
pub fn attach(
    viewport: HtmlElement,
    surface: HtmlElement,
    controller: GestureController,
    observer: Option<StateObserver>,
) -> Result<ZoomableHandle, JsValue> {
    let mut dom = DomSurface::new(viewport.clone(), surface)?;
    let user_agent = dom.user_agent();
    controller.attach(&mut dom, &user_agent);

    let session = Rc::new(RefCell::new(Session {
        controller,
        dom,
        observer,
    }));

    // Non-passive so wheel and touch handlers may cancel scrolling and native pinch
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let mut listeners = Vec::with_capacity(LISTENED_EVENTS.len());
    for kind in LISTENED_EVENTS {
        let session_clone = session.clone();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            dispatch(&session_clone, kind, &event);
        }) as Box<dyn FnMut(Event)>);

        if let Err(e) = viewport.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("Failed to add {} listener: {:?}", kind, e);
            continue;
        }
        listeners.push(Listener { kind, callback });
    }

    log::info!("Zoomable attached ({} listeners)", listeners.len());

    Ok(ZoomableHandle {
        session,
        viewport,
        listeners,
    })
}

fn dispatch(session: &Rc<RefCell<Session>>, kind: &str, event: &Event) {
    let Some(gesture) = translate(kind, event) else {
        return;
    };

    let (response, state, observer) = {
        let Ok(mut session) = session.try_borrow_mut() else {
            log::warn!("Dropped re-entrant {} event", kind);
            return;
        };
        let Session {
            controller,
            dom,
            observer,
        } = &mut *session;

        let response = controller.handle(dom, &gesture);
        (response, controller.state(), observer.clone())
    };

    if response.prevent_default {
        event.prevent_default();
    }

    // Borrow released: observers may call back into the handle
    if let Some(observer) = observer {
        observer(state);
    }
}

/// Convert a DOM event into the controller's event type. The listener was
/// registered by name, so the event's concrete type follows from `kind`.
fn translate(kind: &str, event: &Event) -> Option<GestureEvent> {
    let gesture = match kind {
        "wheel" => {
            let wheel = event.unchecked_ref::<WheelEvent>();
            GestureEvent::Wheel {
                client: mouse_point(wheel),
                delta_y: wheel.delta_y(),
            }
        }
        "mousedown" => GestureEvent::PointerDown {
            client: mouse_point(event.unchecked_ref()),
        },
        "mousemove" => GestureEvent::PointerMove {
            client: mouse_point(event.unchecked_ref()),
        },
        "mouseup" => GestureEvent::PointerUp {
            client: mouse_point(event.unchecked_ref()),
        },
        "mouseleave" => GestureEvent::PointerLeave {
            client: mouse_point(event.unchecked_ref()),
        },
        "touchstart" => GestureEvent::TouchStart {
            touches: touch_points(event.unchecked_ref()),
        },
        "touchmove" => GestureEvent::TouchMove {
            touches: touch_points(event.unchecked_ref()),
        },
        "touchend" | "touchcancel" => GestureEvent::TouchEnd {
            touches: touch_points(event.unchecked_ref()),
        },
        _ => return None,
    };
    Some(gesture)
}

fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

fn touch_points(event: &TouchEvent) -> Vec<Point> {
    let list = event.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|touch| Point::new(touch.client_x() as f64, touch.client_y() as f64))
        .collect()
}
