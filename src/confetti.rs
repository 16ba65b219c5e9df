//! Confetti Binding
//!
//! Thin wrapper over the canvas-confetti global loaded in index.html. The
//! particle system is an external collaborator; if the script is missing the
//! burst is skipped with a warning.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti_raw(opts: JsValue) -> Result<JsValue, JsValue>;
}

/// A single confetti burst: particle count, spread angle in degrees, and
/// vertical origin as a 0..1 viewport fraction.
#[derive(Clone, Copy, Debug)]
pub struct Burst {
    pub particle_count: u32,
    pub spread: f64,
    pub origin_y: f64,
}

/// Burst for the cake wish.
pub const WISH_BURST: Burst = Burst {
    particle_count: 150,
    spread: 80.0,
    origin_y: 0.6,
};

/// Bigger burst for the camera finale.
pub const FINALE_BURST: Burst = Burst {
    particle_count: 300,
    spread: 120.0,
    origin_y: 0.6,
};

pub fn burst(spec: Burst) {
    let opts = js_sys::Object::new();
    let origin = js_sys::Object::new();
    let set = |obj: &js_sys::Object, key: &str, value: f64| {
        let _ = js_sys::Reflect::set(obj, &key.into(), &value.into());
    };
    set(&opts, "particleCount", f64::from(spec.particle_count));
    set(&opts, "spread", spec.spread);
    set(&origin, "y", spec.origin_y);
    let _ = js_sys::Reflect::set(&opts, &"origin".into(), &origin);

    if let Err(e) = confetti_raw(opts.into()) {
        web_sys::console::warn_2(&"confetti burst failed:".into(), &e);
    }
}
