//! Per-style easing curves (progress -> remapped progress).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of easing curves. Each dance style binds exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Cubic ease-in below 0.5, cubic ease-out above.
    SharpBounce,
    /// Smoothstep.
    SmoothDramatic,
    /// Fast ramp, plateau at 1.0 between 20% and 80%, then a linear tail.
    ///
    /// The tail is `5(t - 0.8) + 0.8`, so values between 0.8 and 1.0 exceed
    /// 1.0 (approaching 1.8 just below `t = 1`) and are not clamped. The curve
    /// is pinned to exactly 1.0 at `t = 1` so a transition still lands on its
    /// end pose.
    SharpWithHolds,
    /// Smootherstep.
    VerySmooth,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::SharpBounce,
        Easing::SmoothDramatic,
        Easing::SharpWithHolds,
        Easing::VerySmooth,
    ];

    /// Evaluate the curve at `t`. Pure; no clamping of input or output.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::SharpBounce => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::SmoothDramatic => t * t * (3.0 - 2.0 * t),
            Easing::SharpWithHolds => {
                if t < 0.2 {
                    5.0 * t
                } else if t == 1.0 {
                    1.0
                } else if t > 0.8 {
                    5.0 * (t - 0.8) + 0.8
                } else {
                    1.0
                }
            }
            Easing::VerySmooth => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Easing::SharpBounce => "sharp-bounce",
            Easing::SmoothDramatic => "smooth-dramatic",
            Easing::SharpWithHolds => "sharp-with-holds",
            Easing::VerySmooth => "very-smooth",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| format!("unknown easing '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-12, "left={a} right={b}");
    }

    #[test]
    fn fixed_points_at_zero_and_one() {
        for e in Easing::ALL {
            assert_eq!(e.apply(0.0), 0.0, "{e} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{e} at 1");
        }
    }

    #[test]
    fn sharp_bounce_is_continuous_at_half() {
        approx(Easing::SharpBounce.apply(0.5), 0.5);
        approx(Easing::SharpBounce.apply(0.25), 0.0625);
        approx(Easing::SharpBounce.apply(0.75), 0.9375);
        let below = Easing::SharpBounce.apply(0.5 - 1e-9);
        assert!((below - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smooth_curves_are_symmetric() {
        for e in [Easing::SmoothDramatic, Easing::VerySmooth] {
            approx(e.apply(0.5), 0.5);
            approx(e.apply(0.3) + e.apply(0.7), 1.0);
        }
        approx(Easing::SmoothDramatic.apply(0.25), 0.15625);
        approx(Easing::VerySmooth.apply(0.25), 0.103515625);
    }

    #[test]
    fn sharp_with_holds_plateau_and_overshoot() {
        let e = Easing::SharpWithHolds;
        approx(e.apply(0.1), 0.5);
        assert_eq!(e.apply(0.2), 1.0);
        assert_eq!(e.apply(0.5), 1.0);
        assert_eq!(e.apply(0.8), 1.0);
        // Tail restarts at 0.8 and climbs past 1.0 without clamping.
        approx(e.apply(0.9), 1.3);
        assert!(e.apply(0.99) > 1.0);
    }

    #[test]
    fn names_round_trip() {
        for e in Easing::ALL {
            assert_eq!(e.name().parse::<Easing>().unwrap(), e);
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, format!("\"{}\"", e.name()));
        }
        assert!("bouncy".parse::<Easing>().is_err());
    }
}
