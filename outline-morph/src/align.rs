use crate::error::{MorphError, Result};
use crate::point_set::PointSet;

/// Winning cyclic offset and its total squared distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub offset: usize,
    pub score: f64,
}

/// Sum of squared distances between `from[i]` and `to[(i + offset) % n]`.
pub fn rotation_score(from: &PointSet, to: &PointSet, offset: usize) -> f64 {
    let n = to.len();

    from.iter()
        .enumerate()
        .map(|(i, p)| (*p - to[(i + offset) % n]).hypot2())
        .sum()
}

/// Exhaustive search over all `n` rotations of `to`. Ties go to the smallest
/// offset.
pub fn best_rotation(from: &PointSet, to: &PointSet) -> Result<Rotation> {
    check_lengths(from, to)?;
    Ok(search(from, to))
}

/// Callers guarantee equal lengths.
pub(crate) fn search(from: &PointSet, to: &PointSet) -> Rotation {
    let mut best = Rotation {
        offset: 0,
        score: f64::INFINITY,
    };

    for offset in 0..to.len() {
        let score = rotation_score(from, to, offset);

        if score < best.score {
            best = Rotation { offset, score };
        }
    }

    best
}

/// Rotate `to` so its point order best matches `from`.
///
/// Only cyclic shifts are tried, never mirroring; both sets are expected to
/// share winding already.
pub fn align(from: &PointSet, to: &PointSet) -> Result<PointSet> {
    let rotation = best_rotation(from, to)?;
    Ok(to.rotated(rotation.offset))
}

pub(crate) fn check_lengths(from: &PointSet, to: &PointSet) -> Result<()> {
    if from.len() == to.len() {
        Ok(())
    } else {
        Err(MorphError::InvariantViolation {
            expected: from.len(),
            found: to.len(),
        })
    }
}
