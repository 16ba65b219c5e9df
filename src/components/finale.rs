//! Camera Finale Component
//!
//! Shutter panels plus the celebration overlay. Phase transitions come from
//! the shutter machine in the context: the trigger click (in the journey
//! scene) starts the close, the close transition's end swaps the celebration
//! in behind the panels, and a short closed beat later the panels open.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::audio::Sfx;
use crate::confetti;
use crate::context::CardContext;
use crate::shutter::{ShutterEvent, ShutterPhase};

/// Beat spent fully closed before the panels open onto the celebration.
const HOLD_MS: u32 = 300;

#[component]
pub fn CameraFinale() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");
    let phase = ctx.shutter_phase();
    let top_ref = NodeRef::<Div>::new();

    let closed = move || matches!(phase.get(), ShutterPhase::Closing | ShutterPhase::Hold);
    let overlay_visible =
        move || matches!(phase.get(), ShutterPhase::Hold | ShutterPhase::Revealed);

    // Side effects on phase entry.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| match phase.get() {
            ShutterPhase::Idle | ShutterPhase::Revealed => {}
            ShutterPhase::Closing => {
                ctx.audio.play_effect(Sfx::CameraShutter);
                scroll_to_bottom();
            }
            ShutterPhase::Hold => {
                confetti::burst(confetti::FINALE_BURST);
                let ctx = ctx.clone();
                spawn_local(async move {
                    TimeoutFuture::new(HOLD_MS).await;
                    let _ = ctx.advance_shutter(ShutterEvent::HoldElapsed);
                });
            }
        });
    }

    // The close transition's end drives Closing -> Hold; the same event after
    // the open transition lands in Revealed and is dropped by the machine.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            let Some(panel) = top_ref.get() else { return };
            let ctx = ctx.clone();
            let cb = Closure::<dyn FnMut(web_sys::TransitionEvent)>::new(move |_| {
                let _ = ctx.advance_shutter(ShutterEvent::CloseFinished);
            });
            let _ = panel
                .add_event_listener_with_callback("transitionend", cb.as_ref().unchecked_ref());
            cb.forget();
        });
    }

    view! {
        <div class="shutter-panel shutter-top" class:closed=closed node_ref=top_ref></div>
        <div class="shutter-panel shutter-bottom" class:closed=closed></div>

        <div class="celebration-overlay" class:visible=overlay_visible>
            <div class="photo-frame">
                <img src="assets/celebration.jpg" alt="The birthday photo" />
            </div>
            <h2>"Happy Birthday! 🎂"</h2>
            <p>"Every year with you is the best one yet."</p>
        </div>
    }
}

fn scroll_to_bottom() {
    let Some(win) = web_sys::window() else { return };
    let Some(body) = win.document().and_then(|d| d.body()) else {
        return;
    };
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(f64::from(body.scroll_height()));
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}
