//! The working set of candidate orderings and the filters that narrow it.
//!
//! Filters are destructive: each one keeps only the orderings of the
//! *current* set that pass it. The only way to widen the set again is to
//! reset it to the full enumeration for a row length.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::constraint::Constraint;
use crate::error::PuzzleError;
use crate::permutation::{permutations, BlockCount, Height, Permutation};
use crate::visibility::VisibleCount;

/// A predicate over a single ordering of heights.
pub trait Criterion {
    fn accepts(&self, heights: &[Height]) -> bool;
}

/// Candidate orderings that survived every filter applied since the last reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSet {
    blocks: BlockCount,
    candidates: Vec<Permutation>,
}

impl SolutionSet {
    /// Creates the unfiltered set of all orderings for `blocks`.
    pub fn full(blocks: BlockCount) -> Self {
        Self {
            blocks,
            candidates: permutations(blocks),
        }
    }

    /// Replaces the set with every ordering for `blocks`, discarding any
    /// narrowing applied so far.
    pub fn reset_to_full(&mut self, blocks: BlockCount) {
        self.blocks = blocks;
        self.candidates = permutations(blocks);
        debug!(%blocks, candidates = self.candidates.len(), "reset solution set");
    }

    /// Keeps only orderings with exactly `desired_visible` visible buildings.
    pub fn filter_by_visibility(&mut self, desired_visible: usize) -> Result<(), PuzzleError> {
        if desired_visible > self.blocks.get() {
            return Err(PuzzleError::DesiredVisibleExceedsBlocks {
                requested: desired_visible,
                blocks: self.blocks.get(),
            });
        }
        let removed = self.narrow(&VisibleCount(desired_visible));
        debug!(
            desired_visible,
            removed,
            remaining = self.candidates.len(),
            "filtered by visibility"
        );
        Ok(())
    }

    /// Keeps only orderings satisfying `constraint`.
    pub fn filter_by_constraint(&mut self, constraint: &Constraint) {
        let removed = self.narrow(constraint);
        debug!(
            %constraint,
            removed,
            remaining = self.candidates.len(),
            "filtered by constraint"
        );
    }

    /// Retains the orderings accepted by `criterion`, preserving their order.
    ///
    /// Returns how many orderings were dropped.
    pub fn narrow<C: Criterion + ?Sized>(&mut self, criterion: &C) -> usize {
        let before = self.candidates.len();
        self.candidates.retain(|ordering| criterion.accepts(ordering));
        before - self.candidates.len()
    }

    pub fn blocks(&self) -> BlockCount {
        self.blocks
    }

    pub fn as_slice(&self) -> &[Permutation] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Permutation> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// For each position, the sorted heights that still occur there in at
    /// least one candidate. Every list is empty when no candidates remain.
    pub fn possible_heights(&self) -> Vec<Vec<Height>> {
        let mut seen: Vec<FxHashSet<Height>> = vec![FxHashSet::default(); self.blocks.get()];
        for ordering in &self.candidates {
            for (heights_at, &height) in seen.iter_mut().zip(ordering) {
                heights_at.insert(height);
            }
        }

        seen.into_iter()
            .map(|heights_at| {
                let mut sorted: Vec<Height> = heights_at.into_iter().collect();
                sorted.sort_unstable();
                sorted
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a SolutionSet {
    type Item = &'a Permutation;
    type IntoIter = std::slice::Iter<'a, Permutation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
