//! Scrub Timeline Utilities
//!
//! Pure animation math for scroll-scrubbed sequences: easing curves,
//! progress-keyed tweens, and a ping-pong oscillator. No DOM types here;
//! the UI layer samples these and writes styles itself, so the sequencing
//! can be tested without an animation engine.

mod ease;
mod oscillator;
mod timeline;

pub use ease::Ease;
pub use oscillator::Oscillator;
pub use timeline::{Timeline, Tween};
