//! Error types for layout generation
//!
//! Only `BoundsError` ever reaches a caller of the selector. The other two are
//! recovered inside the maze module by retrying or falling back.

use thiserror::Error;

/// Field bounds that cannot host a grid
///
/// Supported edges are `consts::MIN_FIELD_SIZE..=consts::MAX_FIELD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    #[error("field width must be positive and finite, got {0}")]
    InvalidWidth(f32),
    #[error("field height must be positive and finite, got {0}")]
    InvalidHeight(f32),
    #[error("field width {0} is outside the supported range")]
    WidthOutOfRange(f32),
    #[error("field height {0} is outside the supported range")]
    HeightOutOfRange(f32),
}

/// Why a candidate layout was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("layout has no goals")]
    NoGoals,
    #[error("start point lies outside the field")]
    StartOutOfBounds,
    #[error("goal {index} lies outside the field")]
    GoalOutOfBounds { index: usize },
    #[error("start point is inside a wall's clearance")]
    StartBlocked,
    #[error("goal {index} is inside a wall's clearance")]
    GoalBlocked { index: usize },
    #[error("goal {index} cannot be reached from the start")]
    GoalUnreachable { index: usize },
}

/// Why a generator gave up without producing a valid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationFailure {
    #[error("no valid layout after {attempts} attempts (last: {last})")]
    RetriesExhausted {
        attempts: u32,
        last: ValidationError,
    },
    #[error("generator was given a zero attempt budget")]
    NoAttempts,
}
