//! Birthday Card App
//!
//! Single-page animated greeting: loader, hero, the pinned scroll journey,
//! message cards, the wish cake, and the camera-shutter finale, stacked top
//! to bottom.

use leptos::prelude::*;

use crate::audio::AudioController;
use crate::components::{
    CameraFinale, JourneyScene, LoaderCover, MessageCard, SoundButton, WishCake,
};
use crate::context::CardContext;

#[component]
pub fn App() -> impl IntoView {
    let journey_started = signal(false);
    let trigger_armed = signal(false);

    let ctx = CardContext::new(AudioController::new(), journey_started, trigger_armed);
    provide_context(ctx);

    let started = journey_started.0;

    view! {
        <LoaderCover />
        <SoundButton />

        <header class="hero">
            <div class="hero-content" class:revealed=move || started.get()>
                <h1>"Happy Birthday!"</h1>
                <p>"Scroll slowly. This is our little journey."</p>
            </div>
        </header>

        <JourneyScene />

        <section class="messages-section">
            <h2>"A few words for you"</h2>
            <div class="msg-cards">
                <MessageCard
                    front="For the laughs"
                    back="Nobody makes ordinary days feel like celebrations the way you do."
                />
                <MessageCard
                    front="For the patience"
                    back="Thank you for every time you waited for me to catch up."
                />
                <MessageCard
                    front="For the years ahead"
                    back="Whatever the road looks like, I want to walk it next to you."
                />
            </div>
        </section>

        <WishCake />
        <CameraFinale />
    }
}
