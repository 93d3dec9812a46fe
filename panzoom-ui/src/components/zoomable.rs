// panzoom-ui/src/components/zoomable.rs
use leptos::*;
use panzoom_core::InteractionState;

use crate::hooks::use_zoomable;

/// Clipping viewport whose children can be dragged, wheel-zoomed and pinch-zoomed.
#[component]
pub fn Zoomable(
    /// Classes for the outer viewport element
    #[prop(optional, into)]
    class: String,
    /// Fired after every handled gesture with the controller's state
    #[prop(optional)]
    on_change: Option<Callback<InteractionState>>,
    children: Children,
) -> impl IntoView {
    let viewport_ref = create_node_ref::<html::Div>();
    let surface_ref = create_node_ref::<html::Div>();

    let zoom = use_zoomable(viewport_ref, surface_ref);

    if let Some(callback) = on_change {
        let state = zoom.state;
        create_effect(move |_| callback.call(state.get()));
    }

    view! {
        <div node_ref=viewport_ref class=class>
            <div node_ref=surface_ref>{children()}</div>
        </div>
    }
}
