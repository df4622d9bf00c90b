//! Skyscraper Row Solver Library
//!
//! Finds the arrangements of a row of buildings with distinct heights `1..=N`
//! that match a visible-building count and positional height constraints.
//!
//! ```
//! use skyscrapers::Configuration;
//!
//! let mut view = Configuration::new();
//! view.add_constraint(1, ">", 1).unwrap();
//! view.set_desired_visible(2).unwrap();
//! // [2, 1, 3] and [2, 3, 1]
//! assert_eq!(view.solutions().len(), 2);
//! assert!(view.solutions().iter().all(|row| row[0] == 2));
//! ```

pub mod constraint;
pub mod error;
pub mod format;
pub mod permutation;
pub mod solution;
pub mod view;
pub mod visibility;

pub use constraint::{Constraint, ConstraintSpec, Operator};
pub use error::PuzzleError;
pub use permutation::{permutations, BlockCount, Height, Permutation, MAX_BLOCKS};
pub use solution::{Criterion, SolutionSet};
pub use view::Configuration;
pub use visibility::{count_visible, VisibleCount};
