// panzoom-ui/src/hooks/use_zoomable.rs
use leptos::*;
use panzoom_core::{GestureController, InteractionState};
use std::rc::Rc;
use wasm_bindgen::JsCast;

use crate::binding::{attach, StateObserver, ZoomableHandle};

/// Handle returned by the hook
pub struct ZoomControls {
    /// Latest interaction state, updated after every handled gesture
    pub state: ReadSignal<InteractionState>,
    /// Clears the interaction state without detaching
    pub reset: Box<dyn Fn()>,
}

/// Leptos hook making `surface_ref` pan/zoomable inside `viewport_ref`.
///
/// Attaches once both elements are mounted. On cleanup the controller is reset
/// and every listener removed, so a remount starts from a clean state.
///
/// # Example
///
/// ```rust,no_run
/// use leptos::*;
/// use panzoom_ui::hooks::use_zoomable;
///
/// #[component]
/// pub fn Map() -> impl IntoView {
///     let viewport_ref = create_node_ref::<html::Div>();
///     let surface_ref = create_node_ref::<html::Div>();
///     let zoom = use_zoomable(viewport_ref, surface_ref);
///
///     view! {
///         <div node_ref=viewport_ref class="w-full h-full">
///             <div node_ref=surface_ref>
///                 <img src="map.png" />
///             </div>
///         </div>
///         <p>{move || format!("{:.1}x", zoom.state.get().scale)}</p>
///     }
/// }
/// ```
pub fn use_zoomable(
    viewport_ref: NodeRef<html::Div>,
    surface_ref: NodeRef<html::Div>,
) -> ZoomControls {
    let (state, set_state) = create_signal(InteractionState::default());
    let handle = store_value::<Option<ZoomableHandle>>(None);

    create_effect(move |_| {
        let (Some(viewport_el), Some(surface_el)) = (viewport_ref.get(), surface_ref.get()) else {
            return;
        };
        if handle.with_value(Option::is_some) {
            return;
        }

        let viewport = viewport_el.unchecked_ref::<web_sys::HtmlElement>().clone();
        let surface = surface_el.unchecked_ref::<web_sys::HtmlElement>().clone();
        let observer: StateObserver =
            Rc::new(move |snapshot: InteractionState| set_state.set(snapshot));

        match attach(viewport, surface, GestureController::new(), Some(observer)) {
            Ok(attached) => handle.set_value(Some(attached)),
            Err(e) => log::error!("Failed to make surface zoomable: {:?}", e),
        }
    });

    on_cleanup(move || {
        let _ = handle.try_update_value(|slot| {
            if let Some(mut attached) = slot.take() {
                attached.reset();
                attached.detach();
            }
        });
    });

    let reset = move || {
        handle.with_value(|slot| {
            if let Some(attached) = slot {
                attached.reset();
            }
        });
        set_state.set(InteractionState::default());
    };

    ZoomControls {
        state,
        reset: Box::new(reset),
    }
}
