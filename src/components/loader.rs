//! Loader Cover Component
//!
//! Full-screen cover that fades out once the page has fully loaded, then
//! hands over to the journey timeline. If the load event never fires the
//! cover simply stays up.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::CardContext;

#[component]
pub fn LoaderCover() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let (fading, set_fading) = signal(false);
    let (hidden, set_hidden) = signal(false);
    let cover_ref = NodeRef::<Div>::new();

    // Start the fade on the window load event. The document may already be
    // complete by the time the wasm module runs, so check first.
    Effect::new(move |_| {
        let Some(win) = web_sys::window() else { return };
        let Some(doc) = win.document() else { return };
        if doc.ready_state() == "complete" {
            set_fading.set(true);
        } else {
            let cb = Closure::<dyn FnMut()>::new(move || set_fading.set(true));
            let _ = win.add_event_listener_with_callback("load", cb.as_ref().unchecked_ref());
            cb.forget();
        }
    });

    // When the opacity transition finishes, drop the cover from layout and
    // start the show exactly once.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let Some(cover) = cover_ref.get() else { return };
            let ctx = ctx.clone();
            let cb = Closure::<dyn FnMut(web_sys::TransitionEvent)>::new(move |_| {
                if !ctx.journey_started.get_untracked() {
                    set_hidden.set(true);
                    ctx.start_journey();
                }
            });
            let _ = cover
                .add_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref());
            cb.forget();
        });
    }

    view! {
        <div
            node_ref=cover_ref
            class="loader"
            class:fading=move || fading.get()
            class:hidden=move || hidden.get()
        >
            <span class="loader-text">"wrapping your surprise..."</span>
        </div>
    }
}
