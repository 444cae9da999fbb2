use std::str::FromStr;

use kurbo::{BezPath, PathSeg, Rect, Shape};

use crate::error::{MorphError, Result};

/// Flattening tolerance used when converting analytic shapes to paths.
const SHAPE_TOLERANCE: f64 = 0.1;

/// A closed vector outline in its own coordinate space.
///
/// Immutable once built. Any number of closed subpaths is allowed; the
/// sampler walks them in order as one traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    path: BezPath,
}

impl Outline {
    pub fn new(path: BezPath) -> Self {
        Self { path }
    }

    /// Parse SVG path data (`M0,0 L100,0 L100,100 Z`).
    pub fn parse(data: &str) -> Result<Self> {
        BezPath::from_svg(data)
            .map(Self::new)
            .map_err(|err| MorphError::InvalidOutline(err.to_string()))
    }

    /// Outline of any kurbo shape, e.g. a `Circle` or `RoundedRect`.
    pub fn from_shape(shape: &impl Shape) -> Self {
        Self::new(shape.to_path(SHAPE_TOLERANCE))
    }

    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Every drawn segment in traversal order, closing segments included.
    pub fn segments(&self) -> impl Iterator<Item = PathSeg> + '_ {
        self.path.segments()
    }

    /// Exact bounds of the geometry, curve extrema included.
    pub fn bounding_box(&self) -> Rect {
        self.path.bounding_box()
    }
}

impl From<BezPath> for Outline {
    fn from(path: BezPath) -> Self {
        Self::new(path)
    }
}

impl FromStr for Outline {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
