//! Message Card Component
//!
//! A flippable card. Every click toggles, any number of times, each card
//! independent of the others.

use leptos::prelude::*;

#[component]
pub fn MessageCard(
    /// Label shown on the card front
    front: &'static str,
    /// Message revealed on the back
    back: &'static str,
) -> impl IntoView {
    let (flipped, set_flipped) = signal(false);

    view! {
        <div
            class="msg-card"
            class:flipped=move || flipped.get()
            on:click=move |_| set_flipped.update(|f| *f = !*f)
        >
            <div class="msg-card-inner">
                <div class="msg-card-front">{front}</div>
                <div class="msg-card-back">{back}</div>
            </div>
        </div>
    }
}
