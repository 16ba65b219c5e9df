//! Audio Controller
//!
//! Owns the background track, the one-shot effect clips, and the playing
//! flag. Playback rejection (autoplay policy) is logged and swallowed; a
//! failed element build just disables that clip.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

const BG_MUSIC_SRC: &str = "assets/bg-music.mp3";
const CAKE_SFX_SRC: &str = "assets/cake-blow.mp3";
const SHUTTER_SFX_SRC: &str = "assets/camera-shutter.mp3";

/// One-shot sound effects, restarted from zero on every trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sfx {
    CakeBlow,
    CameraShutter,
}

#[derive(Clone)]
pub struct AudioController {
    music: Option<HtmlAudioElement>,
    cake: Option<HtmlAudioElement>,
    shutter: Option<HtmlAudioElement>,
    playing: RwSignal<bool>,
}

fn element(src: &str) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(src) {
        Ok(el) => Some(el),
        Err(e) => {
            web_sys::console::warn_2(&format!("audio element for {src} failed:").into(), &e);
            None
        }
    }
}

impl AudioController {
    pub fn new() -> Self {
        let music = element(BG_MUSIC_SRC);
        if let Some(m) = &music {
            m.set_loop(true);
        }
        Self {
            music,
            cake: element(CAKE_SFX_SRC),
            shutter: element(SHUTTER_SFX_SRC),
            playing: RwSignal::new(false),
        }
    }

    /// Whether the background track is currently playing. The sound button's
    /// affordance reacts to this.
    pub fn playing(&self) -> ReadSignal<bool> {
        self.playing.read_only()
    }

    /// Start the background track if stopped, pause it if playing. The flag
    /// only flips to playing once the play promise resolves, so a blocked
    /// autoplay leaves state untouched.
    pub fn toggle_music(&self) {
        let Some(music) = self.music.clone() else {
            return;
        };
        if self.playing.get_untracked() {
            // Pause is synchronous and cannot fail.
            let _ = music.pause();
            self.playing.set(false);
        } else {
            let playing = self.playing;
            match music.play() {
                Ok(promise) => spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => playing.set(true),
                        Err(e) => {
                            web_sys::console::warn_2(&"music playback failed:".into(), &e)
                        }
                    }
                }),
                Err(e) => web_sys::console::warn_2(&"music playback failed:".into(), &e),
            }
        }
    }

    /// Fire-and-forget a one-shot clip from the start. Never retried.
    pub fn play_effect(&self, sfx: Sfx) {
        let clip = match sfx {
            Sfx::CakeBlow => &self.cake,
            Sfx::CameraShutter => &self.shutter,
        };
        let Some(clip) = clip else {
            return;
        };
        clip.set_current_time(0.0);
        match clip.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    web_sys::console::warn_2(&"sfx playback failed:".into(), &e);
                }
            }),
            Err(e) => web_sys::console::warn_2(&"sfx playback failed:".into(), &e),
        }
    }
}
