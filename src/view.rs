//! Puzzle configuration for a single row viewed from one end.
//!
//! A [`Configuration`] owns the row length, the criteria applied so far and
//! the live [`SolutionSet`]. Criteria narrow the set immediately and in call
//! order; changing the row length starts over with a fresh, unfiltered set.

use tracing::debug;

use crate::constraint::{Constraint, ConstraintSpec};
use crate::error::PuzzleError;
use crate::permutation::{BlockCount, Permutation};
use crate::solution::SolutionSet;

#[derive(Debug, Clone)]
pub struct Configuration {
    blocks: BlockCount,
    desired_visible: Option<usize>,
    /// Applied constraints, in application order.
    constraints: Vec<Constraint>,
    solutions: SolutionSet,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::with_blocks(BlockCount::default())
    }
}

impl Configuration {
    /// A configuration with the default row length of three.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: BlockCount) -> Self {
        Self {
            blocks,
            desired_visible: None,
            constraints: Vec::new(),
            solutions: SolutionSet::full(blocks),
        }
    }

    /// Changes the row length and regenerates every candidate ordering.
    ///
    /// The desired visible count and all constraints are forgotten; they
    /// are not replayed against the new set.
    pub fn set_blocks(&mut self, blocks: usize) -> Result<(), PuzzleError> {
        let blocks = BlockCount::new(blocks)?;
        if self.desired_visible.is_some() || !self.constraints.is_empty() {
            debug!(
                dropped_constraints = self.constraints.len(),
                dropped_visible = ?self.desired_visible,
                "clearing criteria for new block count"
            );
        }
        self.blocks = blocks;
        self.desired_visible = None;
        self.constraints.clear();
        self.solutions.reset_to_full(blocks);
        Ok(())
    }

    pub fn blocks(&self) -> usize {
        self.blocks.get()
    }

    pub fn block_count(&self) -> BlockCount {
        self.blocks
    }

    /// Keeps only orderings with exactly `desired_visible` visible buildings.
    pub fn set_desired_visible(&mut self, desired_visible: usize) -> Result<(), PuzzleError> {
        self.solutions.filter_by_visibility(desired_visible)?;
        self.desired_visible = Some(desired_visible);
        Ok(())
    }

    /// The most recently applied visible count, if any.
    pub fn desired_visible(&self) -> Option<usize> {
        self.desired_visible
    }

    /// Validates a constraint against the current row and applies it.
    ///
    /// `position` is one-based.
    pub fn add_constraint(
        &mut self,
        position: usize,
        operator: &str,
        value: i64,
    ) -> Result<(), PuzzleError> {
        let constraint = Constraint::new(position, operator, value, self.blocks)?;
        self.push_constraint(constraint);
        Ok(())
    }

    /// Applies a constraint parsed from text.
    pub fn apply(&mut self, spec: &ConstraintSpec) -> Result<(), PuzzleError> {
        let constraint = spec.resolve(self.blocks)?;
        self.push_constraint(constraint);
        Ok(())
    }

    fn push_constraint(&mut self, constraint: Constraint) {
        self.solutions.filter_by_constraint(&constraint);
        self.constraints.push(constraint);
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn solutions(&self) -> &[Permutation] {
        self.solutions.as_slice()
    }

    pub fn solution_set(&self) -> &SolutionSet {
        &self.solutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::Height;
    use crate::visibility::count_visible;

    fn sorted(mut solutions: Vec<Permutation>) -> Vec<Permutation> {
        solutions.sort();
        solutions
    }

    #[test]
    fn test_default_configuration() {
        let view = Configuration::new();
        assert_eq!(view.blocks(), 3);
        assert_eq!(view.desired_visible(), None);
        assert!(view.constraints().is_empty());

        let results = view.solutions();
        assert_eq!(results.len(), 6);
        for result in results {
            assert_eq!(result.len(), 3);
            let mut heights = result.clone();
            heights.sort_unstable();
            assert_eq!(heights, [1, 2, 3]);
        }
    }

    #[test]
    fn test_equal_constraint() {
        let mut view = Configuration::new();
        view.add_constraint(1, "==", 1).unwrap();

        let results = view.solutions();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|result| result[0] == 1));
        assert_eq!(view.constraints().len(), 1);
    }

    #[test]
    fn test_opposing_constraints_leave_nothing() {
        let mut view = Configuration::new();
        view.add_constraint(1, "==", 1).unwrap();
        view.add_constraint(1, "!=", 1).unwrap();
        assert!(view.solutions().is_empty());
    }

    #[test]
    fn test_chained_constraints() {
        let mut view = Configuration::new();
        view.add_constraint(1, ">", 1).unwrap();
        assert!(view.solutions().iter().all(|result| result[0] > 1));

        view.add_constraint(3, "<", 3).unwrap();
        let results = view.solutions();
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|result| result[0] > 1 && result[2] < 3));
    }

    #[test]
    fn test_desired_visible() {
        let mut view = Configuration::new();
        view.set_desired_visible(3).unwrap();
        let expected: Vec<Permutation> = vec![vec![1, 2, 3]];
        assert_eq!(view.solutions(), expected.as_slice());
        assert_eq!(view.desired_visible(), Some(3));
    }

    #[test]
    fn test_constraints_and_desired_visible() {
        let mut view = Configuration::new();
        view.add_constraint(1, ">", 1).unwrap();
        view.set_desired_visible(2).unwrap();
        assert_eq!(view.solutions().len(), 2);

        view.add_constraint(3, "==", 1).unwrap();
        let expected: Vec<Permutation> = vec![vec![2, 3, 1]];
        assert_eq!(view.solutions(), expected.as_slice());
    }

    #[test]
    fn test_block_length() {
        let mut view = Configuration::new();
        view.set_blocks(4).unwrap();
        assert_eq!(view.blocks(), 4);
        assert_eq!(view.solutions().len(), 24);
    }

    #[test]
    fn test_block_count_limits() {
        let mut view = Configuration::new();
        assert_eq!(
            view.set_blocks(6),
            Err(PuzzleError::BlockCountTooLarge {
                requested: 6,
                max: 5
            })
        );
        assert_eq!(view.set_blocks(0), Err(PuzzleError::BlockCountTooSmall));
        assert_eq!(view.blocks(), 3);
        assert_eq!(view.solutions().len(), 6);
    }

    #[test]
    fn test_reset_law() {
        let mut view = Configuration::new();
        for blocks in 1..=5 {
            view.set_desired_visible(1).unwrap();
            view.add_constraint(1, "==", 1).unwrap();
            view.set_blocks(blocks).unwrap();
            let expected: usize = (1..=blocks).product();
            assert_eq!(view.solutions().len(), expected);
            assert_eq!(view.desired_visible(), None);
            assert!(view.constraints().is_empty());
        }
    }

    #[test]
    fn test_constraints_are_not_replayed_after_resize() {
        let mut view = Configuration::new();
        view.add_constraint(3, "==", 3).unwrap();
        view.set_blocks(4).unwrap();
        assert_eq!(view.solutions().len(), 24);
        assert!(view.solutions().iter().any(|result| result[2] != 3));
    }

    #[test]
    fn test_repeated_visibility_is_idempotent() {
        for blocks in 1..=5 {
            for visible in 1..=blocks {
                let mut once = Configuration::new();
                once.set_blocks(blocks).unwrap();
                once.set_desired_visible(visible).unwrap();

                let mut twice = once.clone();
                twice.set_desired_visible(visible).unwrap();
                assert_eq!(once.solutions(), twice.solutions());
                assert!(once
                    .solutions()
                    .iter()
                    .all(|result| count_visible(result) == visible));
            }
        }
    }

    #[test]
    fn test_conflicting_visibility_narrows_to_nothing() {
        let mut view = Configuration::new();
        view.set_desired_visible(2).unwrap();
        view.set_desired_visible(1).unwrap();
        assert!(view.solutions().is_empty());
        assert_eq!(view.desired_visible(), Some(1));
    }

    #[test]
    fn test_constraint_order_does_not_change_final_set() {
        let pairs = [
            ((1, ">", 1), (3, "<", 3)),
            ((2, "!=", 4), (4, "==", 1)),
            ((1, "<", 5), (5, ">", 2)),
        ];
        for ((p1, op1, v1), (p2, op2, v2)) in pairs {
            let mut forward = Configuration::new();
            forward.set_blocks(5).unwrap();
            let mut backward = forward.clone();

            forward.add_constraint(p1, op1, v1).unwrap();
            forward.add_constraint(p2, op2, v2).unwrap();
            backward.add_constraint(p2, op2, v2).unwrap();
            backward.add_constraint(p1, op1, v1).unwrap();

            assert_eq!(
                sorted(forward.solutions().to_vec()),
                sorted(backward.solutions().to_vec())
            );
        }
    }

    #[test]
    fn test_failed_calls_leave_state_untouched() {
        let mut view = Configuration::new();
        view.add_constraint(1, ">", 1).unwrap();
        let before = view.solutions().to_vec();

        assert!(view.add_constraint(4, ">", 1).is_err());
        assert!(view.add_constraint(1, ">=", 1).is_err());
        assert!(view.add_constraint(1, ">", 0).is_err());
        assert!(view.set_desired_visible(4).is_err());
        assert!(view.set_blocks(9).is_err());

        assert_eq!(view.solutions(), before.as_slice());
        assert_eq!(view.constraints().len(), 1);
        assert_eq!(view.desired_visible(), None);
    }

    #[test]
    fn test_desired_visible_validated_against_current_blocks() {
        let mut view = Configuration::new();
        assert_eq!(
            view.set_desired_visible(4),
            Err(PuzzleError::DesiredVisibleExceedsBlocks {
                requested: 4,
                blocks: 3
            })
        );
        view.set_blocks(4).unwrap();
        view.set_desired_visible(4).unwrap();
        let expected: Vec<Height> = vec![1, 2, 3, 4];
        assert_eq!(view.solutions(), &[expected]);
    }

    #[test]
    fn test_apply_parsed_constraint() {
        let mut view = Configuration::new();
        let spec: ConstraintSpec = "1 > 1".parse().unwrap();
        view.apply(&spec).unwrap();
        assert_eq!(view.solutions().len(), 4);

        let out_of_range: ConstraintSpec = "5==1".parse().unwrap();
        assert_eq!(
            view.apply(&out_of_range),
            Err(PuzzleError::InvalidPosition {
                position: 5,
                blocks: 3
            })
        );
        assert_eq!(view.constraints().len(), 1);
    }
}
