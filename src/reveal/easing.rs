//! Easing Curves
//!
//! Maps raw transition progress to eased progress. Every curve is expressed
//! as a CSS-compatible cubic Bézier so that the value sampled here and the
//! value the browser interpolates are the same curve.

use serde::{Deserialize, Serialize};

/// Timing function applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    /// Tween default: slow start, slow settle.
    #[default]
    EaseInOut,
    /// Custom control points `(x1, y1, x2, y2)`, x values in [0, 1].
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Control points for the curve, `None` for linear.
    pub fn control_points(&self) -> Option<(f64, f64, f64, f64)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Eased progress for raw progress `t` (clamped to [0, 1]).
    ///
    /// Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_curve_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }

    /// CSS `transition-timing-function` value.
    pub fn css(&self) -> String {
        match self.control_points() {
            None => "linear".to_string(),
            Some((x1, y1, x2, y2)) => format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2),
        }
    }

    /// True when both x control points lie in [0, 1] (required by CSS).
    pub fn is_valid(&self) -> bool {
        match self.control_points() {
            None => true,
            Some((x1, y1, x2, y2)) => {
                (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
                    && y1.is_finite()
                    && y2.is_finite()
            }
        }
    }
}

/// One coordinate of a cubic Bézier with endpoints fixed at 0 and 1.
fn bezier(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate equals `x`.
///
/// Newton iterations first, bisection if the slope is too flat to trust.
fn solve_curve_x(x: f64, x1: f64, x2: f64) -> f64 {
    const EPSILON: f64 = 1e-7;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_derivative(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // x(s) is monotonic on [0, 1] when x1, x2 are in [0, 1]
    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..64 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn test_endpoints_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_linear_identity() {
        assert_relative_eq!(Easing::Linear.apply(0.25), 0.25);
        assert_relative_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(
                Easing::EaseOut.apply(t) > t,
                "ease-out should lead at t={}",
                t
            );
            assert!(Easing::EaseIn.apply(t) < t, "ease-in should lag at t={}", t);
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let a = Easing::EaseInOut.apply(0.3);
        let b = Easing::EaseInOut.apply(0.7);
        assert_relative_eq!(a + b, 1.0, epsilon = 1e-5);
        assert_relative_eq!(Easing::EaseInOut.apply(0.5), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut previous = 0.0;
            for i in 1..=100 {
                let value = easing.apply(i as f64 / 100.0);
                assert!(
                    value >= previous - 1e-9,
                    "{:?} not monotonic at {}",
                    easing,
                    i
                );
                previous = value;
            }
        }
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(Easing::EaseOut.css(), "cubic-bezier(0, 0, 0.58, 1)");
        assert_eq!(Easing::EaseInOut.css(), "cubic-bezier(0.42, 0, 0.58, 1)");
        assert_eq!(Easing::default().css(), Easing::EaseInOut.css());
    }

    #[test]
    fn test_validity() {
        assert!(Easing::EaseOut.is_valid());
        assert!(!Easing::CubicBezier(1.5, 0.0, 0.5, 1.0).is_valid());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Easing::EaseOut).unwrap();
        assert_eq!(json, "\"ease_out\"");
        let custom: Easing = serde_json::from_str(r#"{"cubic_bezier":[0.1,0.2,0.3,1.0]}"#).unwrap();
        assert_eq!(custom, Easing::CubicBezier(0.1, 0.2, 0.3, 1.0));
    }
}
