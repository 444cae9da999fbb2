use thiserror::Error;

pub type Result<T> = std::result::Result<T, MorphError>;

/// Construction-time failures. None of these are meant for end users; they
/// point at bad static shape data or a bug in library assembly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorphError {
    #[error("outline has a degenerate bounding box ({width}x{height})")]
    DegenerateGeometry { width: f64, height: f64 },

    #[error("sample count must be at least 3, got {0}")]
    InvalidSampleCount(usize),

    #[error("point sets differ in length: expected {expected}, found {found}")]
    InvariantViolation { expected: usize, found: usize },

    #[error("invalid path data: {0}")]
    InvalidOutline(String),

    #[error("outline #{index} rejected")]
    Outline {
        index: usize,
        #[source]
        source: Box<MorphError>,
    },
}
