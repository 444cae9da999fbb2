/// Progress curves for transitions. Every variant maps 0 to 0 and 1 to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Decelerating cubic, `1 - (1 - t)^3`.
    #[default]
    EaseOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` semantics.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// `t` is clamped to `[0.0, 1.0]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => t * (2.0 - t),
            Self::EaseInOut if t < 0.5 => 2.0 * t * t,
            Self::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
            Self::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::CubicBezier(x1, y1, x2, y2) => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }

                let curve_t = solve_curve_t(t, x1, x2);
                bezier_component(curve_t, y1, y2)
            }
        }
    }
}

/// Newton iteration for the curve parameter whose x equals `x`, with a
/// bisection fallback when the slope flattens out.
fn solve_curve_t(x: f64, x1: f64, x2: f64) -> f64 {
    let mut t = x;

    for _ in 0..8 {
        let residual = bezier_component(t, x1, x2) - x;

        if residual.abs() < 1e-9 {
            return t;
        }

        let slope = bezier_slope(t, x1, x2);

        if slope.abs() < 1e-9 {
            break;
        }

        t -= residual / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;

    for _ in 0..40 {
        let value = bezier_component(t, x1, x2);

        if (value - x).abs() < 1e-9 {
            break;
        }

        if value < x {
            lo = t;
        } else {
            hi = t;
        }

        t = (lo + hi) / 2.0;
    }

    t
}

/// One coordinate of a cubic bezier with endpoints 0 and 1.
fn bezier_component(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutCubic,
        Easing::CubicBezier(0.25, 0.1, 0.25, 1.0),
    ];

    #[test]
    fn exact_boundaries() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);

            for i in 1..=100 {
                let t = i as f64 / 100.0;
                let val = easing.apply(t);
                assert!(val >= prev - 1e-9, "{easing:?} non-monotonic at t={t}");
                prev = val;
            }
        }
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(Easing::EaseOutCubic.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutCubic.apply(3.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_decelerates() {
        let e = Easing::EaseOutCubic;

        assert!(e.apply(0.25) > 0.25);
        assert!(e.apply(0.5) - e.apply(0.25) > e.apply(1.0) - e.apply(0.75));
    }

    #[test]
    fn linear_bezier_is_identity() {
        let e = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);

        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((e.apply(t) - t).abs() < 1e-6, "at t={t}: {}", e.apply(t));
        }
    }
}
