//! Journey Choreography
//!
//! The fixed scroll-scrubbed sequence as data: which channel moves when,
//! over the normalized 0..1 progress of the pinned journey section. The
//! component layer samples this every frame and writes styles; everything
//! here is pure so the sequence can be tested directly.

use scrub_timeline::{Ease, Oscillator, Timeline};

/// Scroll runway the pinned section consumes, in px.
pub const SCROLL_LENGTH_PX: f64 = 4000.0;

/// How far the road texture's background offset travels over the full scrub.
pub const ROAD_SHIFT_PX: f64 = 2000.0;

/// Progress at which the lead walker hands over to the partner walkers.
pub const SWAP_POINT: f64 = 0.60;

/// Progress at which the partners start walking off screen.
pub const EXIT_POINT: f64 = 0.85;

/// Progress at which the photo trigger arms and pops in.
pub const TRIGGER_POINT: f64 = 0.95;

/// Off-screen exit distance for the partners, in vw.
pub const EXIT_DISTANCE_VW: f64 = 120.0;

/// Idle bob of the walker sprites: up 10px and back, forever.
pub const WALKER_BOB: Oscillator = Oscillator {
    amplitude: 10.0,
    period: 1.6,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Leftward translation of the journey track, px.
    TrackShift,
    /// Leftward background-position offset of the road texture, px.
    RoadShift,
    /// Rightward translation of the partner walkers, vw.
    PartnerExit,
    /// Photo trigger opacity, 0..1.
    TriggerOpacity,
    /// Photo trigger scale; overshoots past 1 for the pop.
    TriggerScale,
}

/// Horizontal travel of the track. A track narrower than the viewport has
/// nothing to pan, so travel clamps to zero rather than inverting.
pub fn horizontal_travel(track_width: f64, viewport_width: f64) -> f64 {
    (track_width - viewport_width).max(0.0)
}

/// Build the scrubbed timeline for a given track travel distance.
pub fn build(travel_px: f64) -> Timeline<Channel> {
    Timeline::new()
        .tween(Channel::TrackShift, 0.0, 1.0, 0.0, travel_px, Ease::Linear)
        .tween(Channel::RoadShift, 0.0, 1.0, 0.0, ROAD_SHIFT_PX, Ease::Linear)
        .tween(
            Channel::PartnerExit,
            EXIT_POINT,
            1.0,
            0.0,
            EXIT_DISTANCE_VW,
            Ease::InQuad,
        )
        .tween(
            Channel::TriggerOpacity,
            TRIGGER_POINT,
            1.0,
            0.0,
            1.0,
            Ease::Linear,
        )
        .tween(
            Channel::TriggerScale,
            TRIGGER_POINT,
            1.0,
            0.3,
            1.0,
            Ease::OutBack,
        )
}

/// Sprite swap: the partner walkers lead from the swap point onward. The
/// crossfade itself is a CSS opacity transition on this state change.
pub fn partners_lead(progress: f64) -> bool {
    progress >= SWAP_POINT
}

/// The photo trigger only accepts clicks once its reveal has begun.
pub fn trigger_armed(progress: f64) -> bool {
    progress >= TRIGGER_POINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_pans_its_full_travel_linearly() {
        let tl = build(1200.0);
        assert_eq!(tl.value_at(Channel::TrackShift, 0.0), Some(0.0));
        assert_eq!(tl.value_at(Channel::TrackShift, 0.5), Some(600.0));
        assert_eq!(tl.value_at(Channel::TrackShift, 1.0), Some(1200.0));
    }

    #[test]
    fn road_moves_in_lockstep_with_the_track() {
        let tl = build(1000.0);
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let track = tl.value_at(Channel::TrackShift, p).unwrap();
            let road = tl.value_at(Channel::RoadShift, p).unwrap();
            assert!((track / 1000.0 - road / ROAD_SHIFT_PX).abs() < 1e-12);
        }
    }

    #[test]
    fn narrow_track_travel_clamps_to_zero() {
        assert_eq!(horizontal_travel(800.0, 1280.0), 0.0);
        assert_eq!(horizontal_travel(1280.0, 1280.0), 0.0);
        assert_eq!(horizontal_travel(2000.0, 1280.0), 720.0);

        let tl = build(horizontal_travel(800.0, 1280.0));
        assert_eq!(tl.value_at(Channel::TrackShift, 0.7), Some(0.0));
    }

    #[test]
    fn sprite_swap_flips_exactly_at_sixty_percent() {
        assert!(!partners_lead(0.599));
        assert!(partners_lead(0.60));
        assert!(partners_lead(0.999));
    }

    #[test]
    fn partners_hold_still_then_walk_off() {
        let tl = build(1000.0);
        assert_eq!(tl.value_at(Channel::PartnerExit, 0.0), Some(0.0));
        assert_eq!(tl.value_at(Channel::PartnerExit, EXIT_POINT), Some(0.0));
        let mid = tl.value_at(Channel::PartnerExit, 0.95).unwrap();
        assert!(mid > 0.0 && mid < EXIT_DISTANCE_VW);
        assert_eq!(
            tl.value_at(Channel::PartnerExit, 1.0),
            Some(EXIT_DISTANCE_VW)
        );
    }

    #[test]
    fn trigger_is_inert_until_the_pop_and_full_at_the_end() {
        let tl = build(1000.0);
        assert_eq!(tl.value_at(Channel::TriggerOpacity, 0.0), Some(0.0));
        assert_eq!(tl.value_at(Channel::TriggerOpacity, 0.94), Some(0.0));
        assert!(!trigger_armed(0.949));
        assert!(trigger_armed(TRIGGER_POINT));
        assert_eq!(tl.value_at(Channel::TriggerOpacity, 1.0), Some(1.0));
        assert_eq!(tl.value_at(Channel::TriggerScale, 1.0), Some(1.0));
    }

    #[test]
    fn trigger_scale_pops_past_full_size() {
        let tl = build(1000.0);
        let peak = (950..=1000)
            .map(|i| tl.value_at(Channel::TriggerScale, i as f64 / 1000.0).unwrap())
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn walker_bob_rises_ten_and_returns() {
        assert!(WALKER_BOB.value(0.0).abs() < 1e-12);
        assert!((WALKER_BOB.value(0.8) - 10.0).abs() < 1e-9);
        assert!(WALKER_BOB.value(1.6).abs() < 1e-9);
    }
}
