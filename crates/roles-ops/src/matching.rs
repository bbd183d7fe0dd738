//! Bipartite matching between the ties of two nodes.

use std::cmp::Ordering;

/// Size of a maximum matching between `left` and `right` vertices.
///
/// Augmenting paths (Kuhn); `adjacent(i, j)` tells whether left vertex `i`
/// may be paired with right vertex `j`.
pub(crate) fn maximum_matching(
    left: usize,
    right: usize,
    adjacent: impl Fn(usize, usize) -> bool,
) -> usize {
    let adjacency: Vec<Vec<usize>> = (0..left)
        .map(|i| (0..right).filter(|&j| adjacent(i, j)).collect())
        .collect();
    let mut owner: Vec<Option<usize>> = vec![None; right];
    let mut matched = 0;
    for i in 0..left {
        if adjacency[i].is_empty() {
            continue;
        }
        let mut visited = vec![false; right];
        if augment(i, &adjacency, &mut owner, &mut visited) {
            matched += 1;
        }
    }
    matched
}

fn augment(
    i: usize,
    adjacency: &[Vec<usize>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &j in &adjacency[i] {
        if visited[j] {
            continue;
        }
        visited[j] = true;
        let free = match owner[j] {
            None => true,
            Some(previous) => augment(previous, adjacency, owner, visited),
        };
        if free {
            owner[j] = Some(i);
            return true;
        }
    }
    false
}

/// Matching size when compatibility is an equivalence given by a total
/// preorder on keyed ties: sort both sides and add up `min` run lengths.
pub(crate) fn sorted_matching<T>(
    mut left: Vec<(usize, &T)>,
    mut right: Vec<(usize, &T)>,
    order: &dyn Fn(&T, &T) -> Ordering,
) -> usize {
    left.sort_by(|a, b| compare(order, a, b));
    right.sort_by(|a, b| compare(order, a, b));

    let (mut i, mut j, mut matched) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        match compare(order, &left[i], &right[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                let run_left = run_length(order, &left[i..]);
                let run_right = run_length(order, &right[j..]);
                matched += run_left.min(run_right);
                i += run_left;
                j += run_right;
            }
        }
    }
    matched
}

/// Largest count difference within one `(key, rank)` class of keyed ties.
pub(crate) fn sorted_excess<T>(
    mut left: Vec<(usize, &T)>,
    mut right: Vec<(usize, &T)>,
    order: &dyn Fn(&T, &T) -> Ordering,
) -> usize {
    left.sort_by(|a, b| compare(order, a, b));
    right.sort_by(|a, b| compare(order, a, b));

    let (mut i, mut j, mut excess) = (0, 0, 0);
    while i < left.len() || j < right.len() {
        let ordering = match (left.get(i), right.get(j)) {
            (Some(a), Some(b)) => compare(order, a, b),
            (Some(_), None) => Ordering::Less,
            _ => Ordering::Greater,
        };
        match ordering {
            Ordering::Less => {
                let run = run_length(order, &left[i..]);
                excess = excess.max(run);
                i += run;
            }
            Ordering::Greater => {
                let run = run_length(order, &right[j..]);
                excess = excess.max(run);
                j += run;
            }
            Ordering::Equal => {
                let run_left = run_length(order, &left[i..]);
                let run_right = run_length(order, &right[j..]);
                excess = excess.max(run_left.abs_diff(run_right));
                i += run_left;
                j += run_right;
            }
        }
    }
    excess
}

fn compare<T>(order: &dyn Fn(&T, &T) -> Ordering, a: &(usize, &T), b: &(usize, &T)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| order(a.1, b.1))
}

fn run_length<T>(order: &dyn Fn(&T, &T) -> Ordering, items: &[(usize, &T)]) -> usize {
    items
        .iter()
        .take_while(|item| compare(order, &items[0], item) == Ordering::Equal)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn augmenting_paths_reassign_earlier_choices() {
        // Left 0 can use either right vertex, left 1 only right 0.
        let edges = [(0, 0), (0, 1), (1, 0)];
        let size = maximum_matching(2, 2, |i, j| edges.contains(&(i, j)));
        assert_eq!(size, 2);
    }

    #[test]
    fn sorted_merge_counts_runs() {
        let a = [1, 1, 2, 5];
        let b = [1, 2, 2, 7];
        let left = a.iter().map(|w| (0, w)).collect();
        let right = b.iter().map(|w| (0, w)).collect();
        assert_eq!(sorted_matching(left, right, &|x: &i32, y: &i32| x.cmp(y)), 2);

        let keyed_left = vec![(0, &1), (1, &1)];
        let keyed_right = vec![(1, &1), (1, &1)];
        assert_eq!(sorted_matching(keyed_left, keyed_right, &|x: &i32, y: &i32| x.cmp(y)), 1);
    }

    #[test]
    fn sorted_excess_is_the_worst_class() {
        let a = [1, 1, 1, 2, 5];
        let b = [1, 2, 2, 2, 2];
        let left = a.iter().map(|w| (0, w)).collect();
        let right = b.iter().map(|w| (0, w)).collect();
        // Class 1 differs by 2, class 2 by 3, class 5 by 1.
        assert_eq!(sorted_excess(left, right, &|x: &i32, y: &i32| x.cmp(y)), 3);
        assert_eq!(sorted_excess::<i32>(Vec::new(), Vec::new(), &|x, y| x.cmp(y)), 0);
    }
}
