use kurbo::Point;

use crate::point_set::PointSet;

/// Traversal direction as seen on screen, where y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Winding {
    pub fn from_clockwise(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    pub fn is_clockwise(self) -> bool {
        self == Self::Clockwise
    }
}

/// Signed area of the closed polygon through `points` (last wraps to first).
///
/// Negative for clockwise traversal in y-down coordinates.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += (b.x - a.x) * (b.y + a.y);
    }

    sum / 2.0
}

/// `None` when the polygon has no area to orient.
pub fn winding_of(points: &[Point]) -> Option<Winding> {
    let area = signed_area(points);

    if area < 0.0 {
        Some(Winding::Clockwise)
    } else if area > 0.0 {
        Some(Winding::CounterClockwise)
    } else {
        None
    }
}

/// Reverse `points` if they run against `target`; otherwise return them as is.
pub fn normalize_winding(points: PointSet, target: Winding) -> PointSet {
    match winding_of(points.points()) {
        Some(current) if current != target => points.reversed(),
        _ => points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Right along the top, then down: clockwise on screen.
    fn screen_clockwise() -> PointSet {
        PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ])
    }

    #[test]
    fn clockwise_area_is_negative() {
        assert_eq!(signed_area(screen_clockwise().points()), -10000.0);
        assert_eq!(winding_of(screen_clockwise().points()), Some(Winding::Clockwise));
    }

    #[test]
    fn reversed_is_counter_clockwise() {
        let ccw = screen_clockwise().reversed();
        assert_eq!(winding_of(ccw.points()), Some(Winding::CounterClockwise));
    }

    #[test]
    fn matching_orientation_untouched() {
        let pts = screen_clockwise();
        assert_eq!(normalize_winding(pts.clone(), Winding::Clockwise), pts);
    }

    #[test]
    fn mismatched_orientation_reversed() {
        let pts = screen_clockwise();
        let ccw = normalize_winding(pts.clone(), Winding::CounterClockwise);

        assert_eq!(ccw, pts.reversed());
    }

    #[test]
    fn idempotent() {
        for target in [Winding::Clockwise, Winding::CounterClockwise] {
            for input in [screen_clockwise(), screen_clockwise().reversed()] {
                let once = normalize_winding(input, target);
                let twice = normalize_winding(once.clone(), target);

                assert_eq!(once, twice);
                assert_eq!(winding_of(once.points()), Some(target));
            }
        }
    }

    #[test]
    fn zero_area_left_alone() {
        let line = PointSet::new(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 50.0),
            Point::new(100.0, 100.0),
        ]);

        assert_eq!(normalize_winding(line.clone(), Winding::CounterClockwise), line);
    }

    #[test]
    fn flag_mapping() {
        assert_eq!(Winding::from_clockwise(true), Winding::Clockwise);
        assert!(!Winding::from_clockwise(false).is_clockwise());
    }
}
