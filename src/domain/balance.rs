//! Replay order for rebuilding a tree with near-minimal height.
//!
//! Given the sorted keys, the pivot of every range `[start, end]` is
//! `start + (end - start + 1) / 2`, the upper median for even lengths. The
//! pivot is emitted before both halves, so re-inserting keys in the returned
//! order yields a tree of height `ceil(log2(n + 1))`. The exact pivot rule
//! fixes the resulting shape.

use tracing::instrument;

/// Positions into a sorted sequence of length `len`, in re-insertion order.
#[instrument(level = "debug")]
pub fn replay_order(len: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    if len > 0 {
        unsort(0, len - 1, &mut order);
    }
    order
}

fn unsort(start: usize, end: usize, order: &mut Vec<usize>) {
    let pivot = start + (end - start + 1) / 2;
    order.push(pivot);

    if start < pivot {
        unsort(start, pivot - 1, order);
    }
    if pivot < end {
        unsort(pivot + 1, end, order);
    }
}

/// Consumes `sorted` and returns its elements in replay order.
pub fn replay<T>(sorted: Vec<T>) -> Vec<T> {
    let order = replay_order(sorted.len());
    let mut slots: Vec<Option<T>> = sorted.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_has_no_pivots() {
        assert!(replay_order(0).is_empty());
    }

    #[test]
    fn single_element() {
        assert_eq!(replay_order(1), vec![0]);
    }

    #[test]
    fn even_length_takes_upper_median() {
        assert_eq!(replay_order(2), vec![1, 0]);
        assert_eq!(replay_order(4), vec![2, 1, 0, 3]);
    }

    #[test]
    fn seventeen_elements() {
        assert_eq!(
            replay_order(17),
            vec![8, 4, 2, 1, 0, 3, 6, 5, 7, 13, 11, 10, 9, 12, 15, 14, 16]
        );
    }

    #[test]
    fn replay_moves_values() {
        let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(replay(words), vec!["b", "a", "c"]);
    }

    #[test]
    fn every_position_emitted_once() {
        let mut order = replay_order(100);
        order.sort_unstable();
        assert_eq!(order, (0..100).collect::<Vec<_>>());
    }
}
