use kurbo::Point;

use crate::align::check_lengths;
use crate::error::Result;
use crate::point_set::PointSet;

/// Blend `from` toward `to` by `t`, index by index.
///
/// `t <= 0` yields `from` and `t >= 1` yields `to`, bit for bit. In between,
/// each coordinate stays within the range spanned by its two endpoints.
pub fn interpolate(from: &PointSet, to: &PointSet, t: f64) -> Result<PointSet> {
    check_lengths(from, to)?;
    Ok(blend(from, to, t))
}

/// Unchecked [`interpolate`] for sets already known to share length.
pub(crate) fn blend(from: &PointSet, to: &PointSet, t: f64) -> PointSet {
    if t <= 0.0 {
        return from.clone();
    }

    if t >= 1.0 {
        return to.clone();
    }

    from.iter()
        .zip(to)
        .map(|(a, b)| Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)))
        .collect()
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let v = a + (b - a) * t;

    // Rounding can push the result a hair past an endpoint.
    v.clamp(a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from() -> PointSet {
        PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(200.0, 66.6),
            Point::new(0.1, 0.2),
        ])
    }

    fn to() -> PointSet {
        PointSet::new(vec![
            Point::new(100.0, 0.0),
            Point::new(166.7, 133.3),
            Point::new(0.3, 199.9),
        ])
    }

    #[test]
    fn at_zero_matches_source() {
        assert_eq!(interpolate(&from(), &to(), 0.0).unwrap(), from());
    }

    #[test]
    fn at_one_matches_target() {
        assert_eq!(interpolate(&from(), &to(), 1.0).unwrap(), to());
    }

    #[test]
    fn midpoint() {
        let mid = interpolate(&from(), &to(), 0.5).unwrap();

        assert!((mid[0].x - 50.0).abs() < 1e-9);
        assert!((mid[1].y - 99.95).abs() < 1e-9);
    }

    #[test]
    fn stays_between_endpoints() {
        let (a, b) = (from(), to());

        for i in 1..100 {
            let t = i as f64 / 100.0;
            let blended = interpolate(&a, &b, t).unwrap();

            for ((p, q), r) in a.iter().zip(&b).zip(&blended) {
                assert!(r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x), "x escaped at t={t}");
                assert!(r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y), "y escaped at t={t}");
            }
        }
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let short = PointSet::new(vec![Point::ZERO]);
        assert!(interpolate(&from(), &short, 0.5).is_err());
    }
}
