//! Sound Button Component
//!
//! Toggles the background track. The affordance (full opacity, slight
//! scale-up) follows the controller's playing flag.

use leptos::prelude::*;

use crate::context::CardContext;

#[component]
pub fn SoundButton() -> impl IntoView {
    let ctx = use_context::<CardContext>().expect("CardContext should be provided");
    let playing = ctx.audio.playing();
    let audio = ctx.audio.clone();

    view! {
        <button
            class="sound-btn"
            class:playing=move || playing.get()
            title=move || if playing.get() { "Pause the music" } else { "Play the music" }
            on:click=move |_| audio.toggle_music()
        >
            {move || if playing.get() { "🔊" } else { "🎵" }}
        </button>
    }
}
