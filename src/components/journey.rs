//! Journey Scene Component
//!
//! The pinned, scroll-scrubbed section. CSS sticky pins the viewport while
//! the section's extra height provides the scroll runway; a rAF loop smooths
//! displayed progress toward raw scroll progress and applies the sampled
//! timeline to the track, road, walkers, and photo trigger each frame.
//! Sampling is a pure function of progress, so scrolling back up retraces
//! every sub-animation symmetrically.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::{Button, Div, Section};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::CardContext;
use crate::journey_plan::{self, Channel};
use crate::shutter::{ShutterEvent, ShutterPhase};

/// Fraction of the remaining gap closed per frame when easing displayed
/// progress toward the raw scroll position.
const SCRUB_SMOOTHING: f64 = 0.15;

/// Below this gap the displayed progress snaps to raw, so the scrub cannot
/// drift out of sync once scrolling stops.
const SCRUB_SNAP: f64 = 0.0005;

#[component]
pub fn JourneyScene() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");

    let section_ref = NodeRef::<Section>::new();
    let track_ref = NodeRef::<Div>::new();
    let road_ref = NodeRef::<Div>::new();
    let lead_ref = NodeRef::<Div>::new();
    let partners_ref = NodeRef::<Div>::new();
    let trigger_ref = NodeRef::<Button>::new();

    // Lead -> partners sprite swap; the crossfade is a CSS transition on this.
    let (swapped, set_swapped) = signal(false);

    let loop_running = StoredValue::new(false);

    // Kick off the scrub loop once the loader hands over.
    {
        let ctx = ctx.clone();
        Effect::new(move |_| {
            if !ctx.journey_started.get() || loop_running.get_value() {
                return;
            }
            loop_running.set_value(true);

            let viewport_width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let track_width = track_ref
                .get_untracked()
                .map(|t| f64::from(t.scroll_width()))
                .unwrap_or(0.0);
            let timeline =
                journey_plan::build(journey_plan::horizontal_travel(track_width, viewport_width));

            let ctx = ctx.clone();
            let mut displayed = 0.0f64;
            start_raf_loop(move |timestamp_ms| {
                let Some(section) = section_ref.get_untracked() else {
                    return;
                };
                let raw = (-section.get_bounding_client_rect().top()
                    / journey_plan::SCROLL_LENGTH_PX)
                    .clamp(0.0, 1.0);
                displayed += (raw - displayed) * SCRUB_SMOOTHING;
                if (raw - displayed).abs() < SCRUB_SNAP {
                    displayed = raw;
                }

                let bob = journey_plan::WALKER_BOB.value(timestamp_ms / 1000.0);

                if let Some(track) = track_ref.get_untracked() {
                    let x = timeline.value_at(Channel::TrackShift, displayed).unwrap_or(0.0);
                    let _ = web_sys::HtmlElement::style(&track)
                        .set_property("transform", &format!("translateX(-{x:.2}px)"));
                }
                if let Some(road) = road_ref.get_untracked() {
                    let x = timeline.value_at(Channel::RoadShift, displayed).unwrap_or(0.0);
                    let _ = web_sys::HtmlElement::style(&road)
                        .set_property("background-position-x", &format!("-{x:.2}px"));
                }
                if let Some(lead) = lead_ref.get_untracked() {
                    let _ = web_sys::HtmlElement::style(&lead)
                        .set_property("transform", &format!("translateY(-{bob:.2}px)"));
                }
                if let Some(partners) = partners_ref.get_untracked() {
                    let exit = timeline.value_at(Channel::PartnerExit, displayed).unwrap_or(0.0);
                    let _ = web_sys::HtmlElement::style(&partners).set_property(
                        "transform",
                        &format!("translate({exit:.2}vw, -{bob:.2}px)"),
                    );
                }
                if let Some(trigger) = trigger_ref.get_untracked() {
                    let opacity = timeline
                        .value_at(Channel::TriggerOpacity, displayed)
                        .unwrap_or(0.0);
                    let scale = timeline
                        .value_at(Channel::TriggerScale, displayed)
                        .unwrap_or(0.0);
                    let style = web_sys::HtmlElement::style(&trigger);
                    let _ = style.set_property("opacity", &format!("{opacity:.3}"));
                    let _ = style.set_property("transform", &format!("scale({scale:.3})"));
                }

                let partners_lead = journey_plan::partners_lead(displayed);
                if partners_lead != swapped.get_untracked() {
                    set_swapped.set(partners_lead);
                }
                ctx.set_trigger_armed(journey_plan::trigger_armed(displayed));
            });
        });
    }

    let on_capture = {
        let ctx = ctx.clone();
        move |_| {
            if !ctx.trigger_armed.get_untracked() {
                return;
            }
            let _ = ctx.advance_shutter(ShutterEvent::TriggerClicked);
        }
    };

    let trigger_armed = ctx.trigger_armed;
    let shutter_phase = ctx.shutter_phase();

    view! {
        <section class="journey-section" node_ref=section_ref>
            <div class="journey-viewport">
                <div class="journey-track" node_ref=track_ref>
                    <div class="milestone">
                        <span class="milestone-year">"2019"</span>
                        <p>"where it all began"</p>
                    </div>
                    <div class="milestone">
                        <span class="milestone-year">"2021"</span>
                        <p>"adventures, big and small"</p>
                    </div>
                    <div class="milestone">
                        <span class="milestone-year">"2023"</span>
                        <p>"still walking side by side"</p>
                    </div>
                    <div class="milestone">
                        <span class="milestone-year">"today"</span>
                        <p>"and the road goes on"</p>
                    </div>
                </div>

                <div class="road-texture" node_ref=road_ref></div>

                <div class="walker lead-walker" class:faded=move || swapped.get() node_ref=lead_ref>
                    <img class="walker-img" src="assets/walker-lead.png" alt="" />
                </div>
                <div
                    class="walker partner-walkers"
                    class:active=move || swapped.get()
                    node_ref=partners_ref
                >
                    <img class="walker-img" src="assets/walker-partners.png" alt="" />
                </div>

                <button
                    class="photo-trigger"
                    class:armed=move || trigger_armed.get()
                    class:spent=move || {
                        matches!(shutter_phase.get(), ShutterPhase::Hold | ShutterPhase::Revealed)
                    }
                    node_ref=trigger_ref
                    on:click=on_capture
                >
                    "📸 Click to capture"
                </button>
            </div>
        </section>
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs for the page lifetime.
/// The closure cycle through the Rc keeps it alive.
fn start_raf_loop(mut frame: impl FnMut(f64) + 'static) {
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let inner = handle.clone();
    *handle.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
        frame(timestamp_ms);
        if let Some(win) = web_sys::window() {
            let slot = inner.borrow();
            if let Some(cb) = slot.as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }));
    if let Some(win) = web_sys::window() {
        let slot = handle.borrow();
        if let Some(cb) = slot.as_ref() {
            let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
