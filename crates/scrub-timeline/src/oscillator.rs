/// Endless ping-pong oscillation with sinusoidal easing, sampled from a
/// wall-clock timestamp. Drives decorative idle motion that is unrelated to
/// scroll progress.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Peak displacement, in whatever unit the caller applies.
    pub amplitude: f64,
    /// Seconds for one full out-and-back cycle.
    pub period: f64,
}

impl Oscillator {
    pub fn new(amplitude: f64, period: f64) -> Self {
        Self { amplitude, period }
    }

    /// Displacement at `t` seconds: 0 at cycle boundaries, `amplitude` at the
    /// half cycle, smooth at the turnarounds.
    pub fn value(&self, t: f64) -> f64 {
        if self.period <= 0.0 {
            return 0.0;
        }
        let phase = (t / self.period).rem_euclid(1.0);
        self.amplitude * 0.5 * (1.0 - (2.0 * std::f64::consts::PI * phase).cos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_at_half_period_and_returns() {
        let osc = Oscillator::new(10.0, 1.6);
        assert!(osc.value(0.0).abs() < 1e-12);
        assert!((osc.value(0.8) - 10.0).abs() < 1e-9);
        assert!(osc.value(1.6).abs() < 1e-9);
    }

    #[test]
    fn repeats_indefinitely() {
        let osc = Oscillator::new(10.0, 1.6);
        for t in [0.3, 0.7, 1.1] {
            assert!((osc.value(t) - osc.value(t + 1.6 * 100.0)).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_period_is_inert() {
        assert_eq!(Oscillator::new(10.0, 0.0).value(3.0), 0.0);
    }
}
