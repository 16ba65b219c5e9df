//! Application Context
//!
//! Shared state provided via Leptos Context API. Each flag has exactly one
//! mutator: the loader starts the journey, the journey arms the trigger, and
//! the finale advances the shutter machine.

use leptos::prelude::*;

use crate::audio::AudioController;
use crate::shutter::{self, ShutterEvent, ShutterPhase};

/// Page-wide state provided via context
#[derive(Clone)]
pub struct CardContext {
    /// Background music + sound effects
    pub audio: AudioController,
    /// Loader finished; the journey timeline may start - read
    pub journey_started: ReadSignal<bool>,
    /// Loader finished - write
    set_journey_started: WriteSignal<bool>,
    /// Photo trigger reached its reveal point and accepts clicks - read
    pub trigger_armed: ReadSignal<bool>,
    /// Photo trigger armed - write
    set_trigger_armed: WriteSignal<bool>,
    /// Camera finale state machine, advanced only through `advance_shutter`
    shutter_phase: RwSignal<ShutterPhase>,
}

impl CardContext {
    pub fn new(
        audio: AudioController,
        journey_started: (ReadSignal<bool>, WriteSignal<bool>),
        trigger_armed: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            audio,
            journey_started: journey_started.0,
            set_journey_started: journey_started.1,
            trigger_armed: trigger_armed.0,
            set_trigger_armed: trigger_armed.1,
            shutter_phase: RwSignal::new(ShutterPhase::Idle),
        }
    }

    /// Called once by the loader when the cover fade completes
    pub fn start_journey(&self) {
        self.set_journey_started.set(true);
    }

    /// Arm or disarm the photo trigger as scroll progress crosses its reveal point
    pub fn set_trigger_armed(&self, armed: bool) {
        if self.trigger_armed.get_untracked() != armed {
            self.set_trigger_armed.set(armed);
        }
    }

    pub fn shutter_phase(&self) -> ReadSignal<ShutterPhase> {
        self.shutter_phase.read_only()
    }

    /// Feed an event into the shutter machine. Events that are invalid for
    /// the current phase (re-entrant clicks included) are dropped.
    pub fn advance_shutter(&self, event: ShutterEvent) -> Option<ShutterPhase> {
        let next = shutter::step(self.shutter_phase.get_untracked(), event)?;
        self.shutter_phase.set(next);
        Some(next)
    }
}
