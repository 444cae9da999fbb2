use std::fmt::Write as _;
use std::ops::Index;

use kurbo::{BezPath, Point};

/// Fixed-length ordered points resampled from an outline.
///
/// Every set inside one library has the same length and winding, so two
/// sets can be blended index by index.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Same points, opposite traversal.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// `result[i] = self[(i + offset) % len]`.
    pub fn rotated(&self, offset: usize) -> Self {
        if self.points.is_empty() {
            return Self::default();
        }

        let mut points = self.points.clone();
        points.rotate_left(offset % self.points.len());
        Self { points }
    }

    /// Drawable path data: move to the first point, line to the rest, close.
    pub fn to_path_data(&self) -> String {
        let mut out = String::with_capacity(self.points.len() * 16);

        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };

            if i > 0 {
                out.push(' ');
            }

            // Writing into a String cannot fail.
            let _ = write!(out, "{cmd}{:.2},{:.2}", p.x, p.y);
        }

        if !self.points.is_empty() {
            out.push_str(" Z");
        }

        out
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();

        if let Some(first) = iter.next() {
            path.move_to(*first);

            for p in iter {
                path.line_to(*p);
            }

            path.close_path();
        }

        path
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
