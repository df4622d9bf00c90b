//! Counting the buildings visible from the near end of a row.

use crate::permutation::Height;
use crate::solution::Criterion;

/// Counts how many buildings are visible when looking down the row.
///
/// A building is visible when it is strictly taller than every building
/// closer to the viewer. Equal heights never add to the count.
pub fn count_visible<T: Ord>(heights: &[T]) -> usize {
    let mut tallest_so_far: Option<&T> = None;
    let mut visible_count = 0;

    for height in heights {
        if tallest_so_far.map_or(true, |tallest| height > tallest) {
            visible_count += 1;
            tallest_so_far = Some(height);
        }
    }

    visible_count
}

/// Accepts orderings with exactly this many visible buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCount(pub usize);

impl Criterion for VisibleCount {
    fn accepts(&self, heights: &[Height]) -> bool {
        count_visible(heights) == self.0
    }
}
