//! Validation failures reported by the puzzle configuration.

use thiserror::Error;

/// Every way a caller can hand the puzzle invalid input.
///
/// Each variant is raised before any state is touched, so a failed call
/// leaves the configuration and its solution set exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("block count {requested} is larger than the supported maximum of {max}")]
    BlockCountTooLarge { requested: usize, max: usize },
    #[error("block count must be at least 1")]
    BlockCountTooSmall,
    #[error("desired visible count {requested} cannot be larger than the block count {blocks}")]
    DesiredVisibleExceedsBlocks { requested: usize, blocks: usize },
    #[error("constraint position {position} must be between 1 and {blocks}")]
    InvalidPosition { position: usize, blocks: usize },
    #[error("operator `{0}` is not one of `>`, `<`, `==`, `!=`")]
    InvalidOperator(String),
    #[error("constraint value `{0}` must be a positive integer")]
    InvalidValue(String),
    #[error("cannot read constraint `{0}`, expected POSITION OPERATOR VALUE such as `1>2`")]
    MalformedConstraint(String),
}
