use crate::ease::Ease;

/// One animated channel segment on the normalized 0..1 progress axis.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tween<K> {
    pub key: K,
    pub start: f64,
    pub end: f64,
    pub from: f64,
    pub to: f64,
    pub ease: Ease,
}

impl<K> Tween<K> {
    /// Value of this tween alone at raw progress `p`.
    ///
    /// Clamps at both ends, so sampling is a pure function of progress and
    /// scrubbing backwards retraces the same values. A zero or negative span
    /// degrades to a hold at `from` that jumps to `to` at `start`.
    fn value_at(&self, p: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if p < self.start { self.from } else { self.to };
        }
        let t = ((p - self.start) / span).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// A set of tweens sampled together from one scrubbed progress value.
///
/// Tweens sharing a key are applied in `start` order: the latest one whose
/// window has begun wins, so sequential segments compose the way a scrubbed
/// timeline does.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Timeline<K> {
    tweens: Vec<Tween<K>>,
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new() -> Self {
        Self { tweens: Vec::new() }
    }

    /// Schedule a tween of `key` over `start..end` progress.
    pub fn tween(mut self, key: K, start: f64, end: f64, from: f64, to: f64, ease: Ease) -> Self {
        let at = self
            .tweens
            .partition_point(|t: &Tween<K>| t.start <= start);
        self.tweens.insert(
            at,
            Tween {
                key,
                start,
                end,
                from,
                to,
                ease,
            },
        );
        self
    }

    /// Sample one channel at raw progress `p` (clamped to 0..1).
    /// `None` when no tween was scheduled for `key`.
    pub fn value_at(&self, key: K, p: f64) -> Option<f64> {
        let p = p.clamp(0.0, 1.0);
        let mut value = None;
        for t in self.tweens.iter().filter(|t| t.key == key) {
            if p < t.start {
                value.get_or_insert(t.from);
            } else {
                value = Some(t.value_at(p));
            }
        }
        value
    }

    /// All channel values at raw progress `p`, one entry per tween key in
    /// schedule order (deduplicated).
    pub fn sample(&self, p: f64) -> Vec<(K, f64)> {
        let mut out: Vec<(K, f64)> = Vec::with_capacity(self.tweens.len());
        for t in &self.tweens {
            if !out.iter().any(|(k, _)| *k == t.key) {
                if let Some(v) = self.value_at(t.key, p) {
                    out.push((t.key, v));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_interpolates_and_clamps() {
        let tl = Timeline::new().tween(0u8, 0.0, 1.0, 0.0, 100.0, Ease::Linear);
        assert_eq!(tl.value_at(0, 0.0), Some(0.0));
        assert_eq!(tl.value_at(0, 0.5), Some(50.0));
        assert_eq!(tl.value_at(0, 1.0), Some(100.0));
        assert_eq!(tl.value_at(0, 5.0), Some(100.0));
        assert_eq!(tl.value_at(0, -1.0), Some(0.0));
    }

    #[test]
    fn before_window_holds_from_value() {
        let tl = Timeline::new().tween(0u8, 0.5, 1.0, 1.0, 0.0, Ease::Linear);
        assert_eq!(tl.value_at(0, 0.0), Some(1.0));
        assert_eq!(tl.value_at(0, 0.49), Some(1.0));
        assert_eq!(tl.value_at(0, 1.0), Some(0.0));
    }

    #[test]
    fn degenerate_span_is_a_hold_not_an_inversion() {
        let tl = Timeline::new().tween(0u8, 0.5, 0.5, 0.0, 10.0, Ease::Linear);
        assert_eq!(tl.value_at(0, 0.4), Some(0.0));
        assert_eq!(tl.value_at(0, 0.6), Some(10.0));
    }

    #[test]
    fn later_segment_wins_once_started() {
        let tl = Timeline::new()
            .tween(0u8, 0.0, 0.4, 0.0, 1.0, Ease::Linear)
            .tween(0u8, 0.6, 1.0, 1.0, 2.0, Ease::Linear);
        assert_eq!(tl.value_at(0, 0.2), Some(0.5));
        assert_eq!(tl.value_at(0, 0.5), Some(1.0));
        assert_eq!(tl.value_at(0, 0.8), Some(1.5));
    }

    #[test]
    fn scrubbing_back_retraces_the_same_values() {
        let tl = Timeline::new().tween(0u8, 0.2, 0.8, 0.0, 60.0, Ease::InQuad);
        for p in [0.0, 0.3, 0.55, 0.8, 1.0] {
            assert_eq!(tl.value_at(0, p), tl.value_at(0, p));
        }
        let up = tl.value_at(0, 0.55);
        let down = tl.value_at(0, 0.55);
        assert_eq!(up, down);
    }

    #[test]
    fn sample_reports_every_key_once() {
        let tl = Timeline::new()
            .tween(0u8, 0.0, 1.0, 0.0, 1.0, Ease::Linear)
            .tween(1u8, 0.0, 1.0, 0.0, 2.0, Ease::Linear)
            .tween(0u8, 0.5, 1.0, 1.0, 3.0, Ease::Linear);
        let s = tl.sample(1.0);
        assert_eq!(s.len(), 2);
        assert!(s.contains(&(0u8, 3.0)));
        assert!(s.contains(&(1u8, 2.0)));
    }
}
