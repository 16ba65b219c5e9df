//! Wish Cake Component
//!
//! First click blows out the flame, swaps the wish text, fires confetti and
//! the blow sound, and reveals the surprise characters. The flame never
//! relights, so later clicks are no-ops.

use leptos::prelude::*;

use crate::audio::Sfx;
use crate::confetti;
use crate::context::CardContext;

#[component]
pub fn WishCake() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");
    let audio = ctx.audio.clone();

    let (blown, set_blown) = signal(false);

    let make_wish = move |_| {
        if blown.get_untracked() {
            return;
        }
        set_blown.set(true);
        audio.play_effect(Sfx::CakeBlow);
        confetti::burst(confetti::WISH_BURST);
    };

    view! {
        <section class="wish-section">
            <h2>"Make a wish"</h2>

            <div class="cake-container" on:click=make_wish>
                <div class="cake">
                    <div class="cake-layer bottom"></div>
                    <div class="cake-layer middle"></div>
                    <div class="cake-layer top"></div>
                    <div class="candle">
                        <div class="flame" class:out=move || blown.get()></div>
                    </div>
                </div>
            </div>

            <p class="wish-text">
                {move || {
                    if blown.get() {
                        "Your wish has been made! May it come true... ✨"
                    } else {
                        "Blow out the candle (tap the cake)"
                    }
                }}
            </p>

            <img
                class="surprise-char left"
                class:revealed=move || blown.get()
                src="assets/surprise-left.png"
                alt=""
            />
            <img
                class="surprise-char right"
                class:revealed=move || blown.get()
                src="assets/surprise-right.png"
                alt=""
            />
        </section>
    }
}
