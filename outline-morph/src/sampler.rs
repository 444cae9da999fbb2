//! Arc-length resampling of outlines into normalized point sets.
//!
//! Lengths come from path math (exact for lines, numerically integrated for
//! curves), so sampling needs no rendering surface and is deterministic.

use kurbo::{ParamCurve, ParamCurveArclen, PathSeg, Point, Rect};

use crate::error::{MorphError, Result};
use crate::outline::Outline;
use crate::point_set::PointSet;

/// Side of the square every sampled point set is normalized into.
pub const FRAME_SIZE: f64 = 200.0;

pub const MIN_SAMPLES: usize = 3;

/// Accuracy for curve arc length and its inverse, in outline units.
const ARCLEN_ACCURACY: f64 = 1e-6;

/// Resample `outline` to `sample_count` points at equal arc-length steps.
///
/// Samples sit at `k * L / (N - 1)` for `k` in `0..N`, so the last one lands
/// on the end of the traversal. Points are mapped from the outline's bounding
/// box into a `FRAME_SIZE` square.
pub fn sample(outline: &Outline, sample_count: usize) -> Result<PointSet> {
    if sample_count < MIN_SAMPLES {
        return Err(MorphError::InvalidSampleCount(sample_count));
    }

    let bbox = outline.bounding_box();
    check_bbox(&bbox)?;

    let segments: Vec<(PathSeg, f64)> = outline
        .segments()
        .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
        .collect();

    let total: f64 = segments.iter().map(|(_, len)| len).sum();

    if !(total.is_finite() && total > 0.0) {
        return Err(MorphError::DegenerateGeometry {
            width: bbox.width(),
            height: bbox.height(),
        });
    }

    let last = (sample_count - 1) as f64;
    let mut walker = SegmentWalker::new(&segments);

    let points = (0..sample_count)
        .map(|k| {
            let target = total * (k as f64) / last;
            normalize(walker.point_at(target), &bbox)
        })
        .collect();

    Ok(points)
}

/// Total drawn length of an outline.
pub fn arc_length(outline: &Outline) -> f64 {
    outline
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum()
}

fn check_bbox(bbox: &Rect) -> Result<()> {
    let width = bbox.width();
    let height = bbox.height();

    let usable = |v: f64| v.is_finite() && v > 0.0;

    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(MorphError::DegenerateGeometry { width, height })
    }
}

fn normalize(p: Point, bbox: &Rect) -> Point {
    Point::new(
        (p.x - bbox.x0) / bbox.width() * FRAME_SIZE,
        (p.y - bbox.y0) / bbox.height() * FRAME_SIZE,
    )
}

/// Forward-only cursor over segments. Targets must be non-decreasing.
struct SegmentWalker<'a> {
    segments: &'a [(PathSeg, f64)],
    index: usize,
    /// Length of all segments before `index`.
    consumed: f64,
}

impl<'a> SegmentWalker<'a> {
    fn new(segments: &'a [(PathSeg, f64)]) -> Self {
        Self {
            segments,
            index: 0,
            consumed: 0.0,
        }
    }

    fn point_at(&mut self, target: f64) -> Point {
        let last = self.segments.len() - 1;

        while self.index < last && self.consumed + self.segments[self.index].1 < target {
            self.consumed += self.segments[self.index].1;
            self.index += 1;
        }

        let (seg, len) = self.segments[self.index];
        let local = (target - self.consumed).clamp(0.0, len);

        let t = if len > 0.0 {
            seg.inv_arclen(local, ARCLEN_ACCURACY).clamp(0.0, 1.0)
        } else {
            0.0
        };

        seg.eval(t)
    }
}
