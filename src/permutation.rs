//! Row sizes, building heights and exhaustive ordering generation.
//!
//! A row of `N` positions holds one building of each height `1..=N`, so the
//! candidate arrangements are exactly the permutations of that height set.

use std::fmt;

use crate::error::PuzzleError;

/// Height of a single building.
pub type Height = u8;

/// One candidate arrangement of heights; index 0 is nearest to the viewer.
pub type Permutation = Vec<Height>;

/// Largest supported row length. 5! = 120 orderings keeps enumeration cheap.
pub const MAX_BLOCKS: usize = 5;

/// Row length used by a fresh configuration.
pub const DEFAULT_BLOCKS: usize = 3;

/// Number of positions in the row, validated to `1..=MAX_BLOCKS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockCount(usize);

impl BlockCount {
    /// Validates a requested row length.
    pub fn new(blocks: usize) -> Result<Self, PuzzleError> {
        if blocks > MAX_BLOCKS {
            return Err(PuzzleError::BlockCountTooLarge {
                requested: blocks,
                max: MAX_BLOCKS,
            });
        }
        if blocks == 0 {
            return Err(PuzzleError::BlockCountTooSmall);
        }
        Ok(Self(blocks))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of distinct orderings for this row length (`N!`).
    pub fn ordering_count(self) -> usize {
        (1..=self.0).product()
    }
}

impl Default for BlockCount {
    fn default() -> Self {
        Self(DEFAULT_BLOCKS)
    }
}

impl TryFrom<usize> for BlockCount {
    type Error = PuzzleError;

    fn try_from(blocks: usize) -> Result<Self, Self::Error> {
        Self::new(blocks)
    }
}

impl fmt::Display for BlockCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A partial ordering in the iterative depth-first enumeration.
///
/// Fixed-size storage keeps the stack entries `Copy` and off the heap.
#[derive(Clone, Copy)]
struct PartialOrdering {
    /// Heights placed so far, nearest first.
    heights: [Height; MAX_BLOCKS],
    placed_count: usize,
    /// Bit `i` is set while height `i + 1` is still unused.
    unused_heights: u8,
    /// Index of the next height to try at position `placed_count`.
    next_candidate: usize,
}

/// Enumerates every ordering of the heights `1..=blocks`.
///
/// Orderings come out in ascending lexicographic order, starting with
/// `[1, 2, .., N]` and ending with `[N, .., 2, 1]`.
pub fn permutations(blocks: BlockCount) -> Vec<Permutation> {
    let row_length = blocks.get();
    let mut orderings = Vec::with_capacity(blocks.ordering_count());

    let mut search_stack = vec![PartialOrdering {
        heights: [0; MAX_BLOCKS],
        placed_count: 0,
        unused_heights: (1u8 << row_length) - 1,
        next_candidate: 0,
    }];

    while let Some(mut partial) = search_stack.pop() {
        if partial.placed_count == row_length {
            orderings.push(partial.heights[..row_length].to_vec());
            continue;
        }

        // lowest unused height not yet tried at this position
        let Some(candidate) = (partial.next_candidate..row_length)
            .find(|&i| partial.unused_heights & (1 << i) != 0)
        else {
            continue;
        };
        partial.next_candidate = candidate + 1;

        let mut extended = partial;
        extended.heights[partial.placed_count] = (candidate + 1) as Height;
        extended.placed_count += 1;
        extended.unused_heights &= !(1 << candidate);
        extended.next_candidate = 0;

        // resume the parent after the extended branch is exhausted
        search_stack.push(partial);
        search_stack.push(extended);
    }

    orderings
}
