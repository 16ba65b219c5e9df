#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    InOutSine,
    /// Overshoots past 1.0 before settling, for "pop" reveals.
    OutBack,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::InOutSine => 0.5 - 0.5 * (std::f64::consts::PI * t).cos(),
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::InQuad, Ease::InOutSine, Ease::OutBack] {
            assert!((ease.apply(0.0)).abs() < 1e-12);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn input_is_clamped() {
        for ease in [Ease::Linear, Ease::InQuad, Ease::InOutSine, Ease::OutBack] {
            assert_eq!(ease.apply(-2.0), ease.apply(0.0));
            assert_eq!(ease.apply(3.0), ease.apply(1.0));
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in [Ease::Linear, Ease::InQuad, Ease::InOutSine] {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b);
            assert!(b < c);
        }
    }

    #[test]
    fn out_back_overshoots() {
        let peak = (0..100)
            .map(|i| Ease::OutBack.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
