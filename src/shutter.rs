//! Camera Shutter State Machine
//!
//! The finale is a multi-step timed choreography: close the shutter, reveal
//! the celebration behind it, hold a beat, open again. Modeling it as an
//! explicit state machine keeps the steps in order and drops re-entrant
//! clicks instead of letting overlapping sequences interleave.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShutterPhase {
    /// Waiting for the photo trigger.
    #[default]
    Idle,
    /// Shutter panels are closing (CSS transition running).
    Closing,
    /// Fully closed; celebration swapped in behind the panels, holding a beat.
    Hold,
    /// Panels opened onto the celebration. Terminal.
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShutterEvent {
    /// User clicked the photo trigger.
    TriggerClicked,
    /// The close transition finished (transitionend on a shutter panel).
    CloseFinished,
    /// The closed-hold pause elapsed.
    HoldElapsed,
}

/// Advance the machine. `None` means the event is ignored in this phase —
/// notably extra trigger clicks while a sequence is already running.
pub fn step(phase: ShutterPhase, event: ShutterEvent) -> Option<ShutterPhase> {
    use ShutterEvent::*;
    use ShutterPhase::*;
    match (phase, event) {
        (Idle, TriggerClicked) => Some(Closing),
        (Closing, CloseFinished) => Some(Hold),
        (Hold, HoldElapsed) => Some(Revealed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ShutterEvent::*;
    use ShutterPhase::*;

    #[test]
    fn happy_path_runs_in_order() {
        let p = step(Idle, TriggerClicked).unwrap();
        assert_eq!(p, Closing);
        let p = step(p, CloseFinished).unwrap();
        assert_eq!(p, Hold);
        let p = step(p, HoldElapsed).unwrap();
        assert_eq!(p, Revealed);
    }

    #[test]
    fn repeat_clicks_mid_sequence_are_dropped() {
        assert_eq!(step(Closing, TriggerClicked), None);
        assert_eq!(step(Hold, TriggerClicked), None);
        assert_eq!(step(Revealed, TriggerClicked), None);
    }

    #[test]
    fn out_of_order_signals_are_dropped() {
        assert_eq!(step(Idle, CloseFinished), None);
        assert_eq!(step(Idle, HoldElapsed), None);
        assert_eq!(step(Closing, HoldElapsed), None);
        assert_eq!(step(Hold, CloseFinished), None);
        assert_eq!(step(Revealed, CloseFinished), None);
    }

    #[test]
    fn revealed_is_terminal() {
        for ev in [TriggerClicked, CloseFinished, HoldElapsed] {
            assert_eq!(step(Revealed, ev), None);
        }
    }
}
