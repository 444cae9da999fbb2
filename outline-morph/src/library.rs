use log::{debug, warn};

use crate::error::{MorphError, Result};
use crate::outline::Outline;
use crate::point_set::PointSet;
use crate::sampler;
use crate::winding::{self, Winding};

/// Step applied to the library cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// `+1` / `-1`; zero counts as forward.
    pub fn from_step(step: i32) -> Self {
        if step >= 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Normalized, winding-consistent point sets built once from a fixed list of
/// outlines, plus a cursor naming the current entry.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    shapes: Vec<PointSet>,
    cursor: usize,
}

impl ShapeLibrary {
    /// Fails on the first outline that cannot be sampled.
    pub fn build<I>(outlines: I, sample_count: usize, winding: Winding) -> Result<Self>
    where
        I: IntoIterator<Item = Outline>,
    {
        let shapes = outlines
            .into_iter()
            .enumerate()
            .map(|(index, outline)| {
                prepare(&outline, sample_count, winding).map_err(|err| MorphError::Outline {
                    index,
                    source: Box::new(err),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_point_sets(shapes)
    }

    /// Like [`ShapeLibrary::build`], but degenerate outlines are dropped with a
    /// warning instead of failing the whole library.
    pub fn build_lenient<I>(outlines: I, sample_count: usize, winding: Winding) -> Result<Self>
    where
        I: IntoIterator<Item = Outline>,
    {
        let mut shapes = Vec::new();

        for (index, outline) in outlines.into_iter().enumerate() {
            match prepare(&outline, sample_count, winding) {
                Ok(points) => shapes.push(points),
                Err(err @ MorphError::DegenerateGeometry { .. }) => {
                    warn!("skipping outline #{index}: {err}");
                }
                Err(err) => {
                    return Err(MorphError::Outline {
                        index,
                        source: Box::new(err),
                    });
                }
            }
        }

        Self::from_point_sets(shapes)
    }

    /// Point sets must already share length and winding.
    pub fn from_point_sets(shapes: Vec<PointSet>) -> Result<Self> {
        if let Some(first) = shapes.first() {
            let expected = first.len();

            if let Some(bad) = shapes.iter().find(|s| s.len() != expected) {
                return Err(MorphError::InvariantViolation {
                    expected,
                    found: bad.len(),
                });
            }
        }

        debug!(
            "shape library ready: {} shapes, {} points each",
            shapes.len(),
            shapes.first().map_or(0, PointSet::len)
        );

        Ok(Self { shapes, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn get(&self, index: usize) -> Option<&PointSet> {
        self.shapes.get(index)
    }

    pub fn current(&self) -> Option<&PointSet> {
        self.shapes.get(self.cursor)
    }

    /// Move the cursor one step, wrapping at both ends.
    ///
    /// Returns `(previous, next)` indices, or `None` for an empty library.
    pub fn advance(&mut self, direction: Direction) -> Option<(usize, usize)> {
        let len = self.shapes.len();

        if len == 0 {
            return None;
        }

        let previous = self.cursor;
        self.cursor = match direction {
            Direction::Forward => (previous + 1) % len,
            Direction::Backward => (previous + len - 1) % len,
        };

        Some((previous, self.cursor))
    }
}

fn prepare(outline: &Outline, sample_count: usize, winding: Winding) -> Result<PointSet> {
    let points = sampler::sample(outline, sample_count)?;
    Ok(winding::normalize_winding(points, winding))
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::*;
    use crate::shapes;
    use crate::winding::winding_of;

    #[test]
    fn every_entry_shares_length_and_winding() {
        let lib = ShapeLibrary::build(shapes::all(), 48, Winding::Clockwise).unwrap();

        assert_eq!(lib.len(), shapes::all().len());

        for i in 0..lib.len() {
            let shape = lib.get(i).unwrap();
            assert_eq!(shape.len(), 48);
            assert_eq!(winding_of(shape.points()), Some(Winding::Clockwise));
        }
    }

    #[test]
    fn counter_clockwise_library() {
        let lib = ShapeLibrary::build(shapes::all(), 24, Winding::CounterClockwise).unwrap();

        for i in 0..lib.len() {
            let shape = lib.get(i).unwrap();
            assert_eq!(winding_of(shape.points()), Some(Winding::CounterClockwise));
        }
    }

    #[test]
    fn strict_build_reports_index() {
        let outlines = vec![shapes::square(), Outline::parse("M0,0 L10,0 Z").unwrap()];
        let err = ShapeLibrary::build(outlines, 12, Winding::Clockwise).unwrap_err();

        assert!(matches!(err, MorphError::Outline { index: 1, .. }));
    }

    #[test]
    fn lenient_build_skips_degenerate() {
        let outlines = vec![
            shapes::square(),
            Outline::parse("M0,0 L10,0 Z").unwrap(),
            shapes::diamond(),
        ];
        let lib = ShapeLibrary::build_lenient(outlines, 12, Winding::Clockwise).unwrap();

        assert_eq!(lib.len(), 2);
    }

    #[test]
    fn lenient_build_still_rejects_bad_sample_count() {
        let err = ShapeLibrary::build_lenient(vec![shapes::square()], 1, Winding::Clockwise)
            .unwrap_err();

        assert!(matches!(err, MorphError::Outline { index: 0, .. }));
    }

    #[test]
    fn mixed_lengths_rejected() {
        let a = PointSet::new(vec![Point::ZERO; 4]);
        let b = PointSet::new(vec![Point::ZERO; 5]);

        assert_eq!(
            ShapeLibrary::from_point_sets(vec![a, b]).unwrap_err(),
            MorphError::InvariantViolation {
                expected: 4,
                found: 5
            }
        );
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let outlines = vec![shapes::square(), shapes::diamond(), shapes::triangle()];
        let mut lib = ShapeLibrary::build(outlines, 8, Winding::Clockwise).unwrap();

        assert_eq!(lib.advance(Direction::Backward), Some((0, 2)));
        assert_eq!(lib.advance(Direction::Forward), Some((2, 0)));
        assert_eq!(lib.advance(Direction::Forward), Some((0, 1)));
        assert_eq!(lib.cursor(), 1);
    }

    #[test]
    fn empty_library_does_not_advance() {
        let mut lib = ShapeLibrary::from_point_sets(Vec::new()).unwrap();

        assert_eq!(lib.advance(Direction::Forward), None);
        assert!(lib.current().is_none());
    }

    #[test]
    fn step_sign() {
        assert_eq!(Direction::from_step(1), Direction::Forward);
        assert_eq!(Direction::from_step(-1), Direction::Backward);
    }
}
