//! Min-heap entry for priority-first searches.

use std::cmp::Ordering;

/// `BinaryHeap` entry that pops the smallest score first.
///
/// Ties on score fall back to the smaller vertex index, so Dijkstra and Prim
/// settle equal-cost vertices in a deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T: Ord> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

impl<K: Ord, T: Ord> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_pops_smallest_score_first() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(5, 0usize));
        heap.push(MinScored(1, 3));
        heap.push(MinScored(3, 1));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|s| s.0).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn test_ties_break_on_smaller_index() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(2, 7usize));
        heap.push(MinScored(2, 4));
        heap.push(MinScored(2, 5));

        assert_eq!(heap.pop(), Some(MinScored(2, 4)));
        assert_eq!(heap.pop(), Some(MinScored(2, 5)));
    }
}
