//! Order-preserving merge of two flat sequences.
//!
//! The result holds every element of `source` in its original order. Items
//! that also occur in `update` are *anchors*: they keep their source position
//! and serve as insertion points for the items that only `update` has.
//!
//! - a run of new items is inserted right before the anchor that follows it
//!   in `update`
//! - new items after the last anchor of `update` go right after that anchor
//! - with no anchor at all, `update` is appended
//!
//! ```rust
//! use seqmerge::{merge, seq};
//!
//! let merged = merge(&seq![2, "b", 1, "a"], &seq![5, 3, 6, 7, 1, 2, 4]);
//! assert_eq!(merged, seq![2, 4, "b", 5, 3, 6, 7, 1, "a"]);
//! ```
//!
//! Anchors match the first occurrence of their value in `source`. Repeated
//! values in `update` are handled one occurrence at a time, so a repeated new
//! item is inserted as many times as it appears.

use crate::MergeOptions;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion plan: which update indices go around which source slot.
struct Placement {
    before: Vec<Vec<usize>>,
    after: Vec<Vec<usize>>,
    trailing: Vec<usize>,
    anchors: usize,
}

impl Placement {
    fn plan<T: Eq + Hash>(source: &[T], update: &[T]) -> Self {
        let mut positions: HashMap<&T, usize> = HashMap::with_capacity(source.len());
        for (i, item) in source.iter().enumerate() {
            positions.entry(item).or_insert(i);
        }

        let mut before = vec![Vec::new(); source.len()];
        let mut after = vec![Vec::new(); source.len()];
        let mut pending = Vec::new();
        let mut last_anchor = None;
        let mut anchors = 0;

        for (j, item) in update.iter().enumerate() {
            match positions.get(item) {
                Some(&i) => {
                    before[i].append(&mut pending);
                    last_anchor = Some(i);
                    anchors += 1;
                }
                None => pending.push(j),
            }
        }

        let trailing = match last_anchor {
            Some(i) => {
                after[i].append(&mut pending);
                Vec::new()
            }
            None => pending,
        };

        Placement {
            before,
            after,
            trailing,
            anchors,
        }
    }

    fn inserted(&self) -> usize {
        self.before.iter().map(Vec::len).sum::<usize>()
            + self.after.iter().map(Vec::len).sum::<usize>()
            + self.trailing.len()
    }

    fn assemble<T, F>(&self, source: &[T], mut take: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(usize) -> Option<T>,
    {
        let mut merged = Vec::with_capacity(source.len() + self.inserted());
        for (i, item) in source.iter().enumerate() {
            merged.extend(self.before[i].iter().filter_map(|&j| take(j)));
            merged.push(item.clone());
            merged.extend(self.after[i].iter().filter_map(|&j| take(j)));
        }
        merged.extend(self.trailing.iter().filter_map(|&j| take(j)));
        merged
    }
}

/// Merges `update` into `source`, preserving the order of both.
///
/// Neither input is modified.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{merge, seq};
///
/// assert_eq!(merge(&seq![], &seq![1, 2]), seq![1, 2]);
/// assert_eq!(merge(&seq!["b", 1, "a"], &seq![3, 1, 2]), seq!["b", 3, 1, 2, "a"]);
/// ```
#[must_use]
pub fn merge<T>(source: &[T], update: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let placement = Placement::plan(source, update);
    log::trace!(
        "merge: {} source items, {} anchors, {} new items",
        source.len(),
        placement.anchors,
        placement.inserted()
    );
    placement.assemble(source, |j| update.get(j).cloned())
}

/// Merges `update` into `source` according to `options`.
///
/// Without [`MergeOptions::strict`] this is [`merge`] and `update` is left
/// untouched. In strict mode the items of `update` are moved into the result
/// and `update` is left empty, unless the two sequences share no anchor: then
/// nothing is merged, the result equals `source` and `update` keeps its items.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{merge_with_options, seq, MergeOptions};
///
/// let mut update = seq![1, 2];
/// let merged = merge_with_options(&seq![], &mut update, &MergeOptions::strict());
/// assert!(merged.is_empty());
/// assert_eq!(update, seq![1, 2]);
/// ```
pub fn merge_with_options<T>(source: &[T], update: &mut Vec<T>, options: &MergeOptions) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    if !options.strict {
        return merge(source, update);
    }

    let placement = Placement::plan(source, update);
    if placement.anchors == 0 {
        log::debug!(
            "strict merge: no anchors between {} source and {} update items, nothing merged",
            source.len(),
            update.len()
        );
        return source.to_vec();
    }

    log::trace!(
        "strict merge: {} anchors, consuming {} update items",
        placement.anchors,
        update.len()
    );
    let mut consumed: Vec<Option<T>> = std::mem::take(update).into_iter().map(Some).collect();
    placement.assemble(source, |j| consumed.get_mut(j).and_then(Option::take))
}

/// Strict, consuming merge. Shorthand for [`merge_with_options`] with
/// [`MergeOptions::strict`].
pub fn merge_strict<T>(source: &[T], update: &mut Vec<T>) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    merge_with_options(source, update, &MergeOptions::strict())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_groups_runs_by_following_anchor() {
        let source = ['x', 'b', 'y'];
        let update = ['p', 'q', 'b', 'r', 'y', 's'];
        let placement = Placement::plan(&source, &update);

        assert_eq!(placement.anchors, 2);
        assert_eq!(placement.before, vec![vec![], vec![0, 1], vec![3]]);
        assert_eq!(placement.after, vec![vec![], vec![], vec![5]]);
        assert!(placement.trailing.is_empty());
    }

    #[test]
    fn test_plan_without_anchors_trails() {
        let placement = Placement::plan(&['a'], &['b', 'c']);
        assert_eq!(placement.anchors, 0);
        assert_eq!(placement.trailing, vec![0, 1]);
        assert_eq!(placement.inserted(), 2);
    }

    #[test]
    fn test_after_run_precedes_next_before_run() {
        // 4 trails anchor 2; 3 lands before anchor 1
        assert_eq!(merge(&[2, 10, 1], &[3, 1, 2, 4]), vec![2, 4, 10, 3, 1]);
    }

    #[test]
    fn test_first_occurrence_anchors() {
        assert_eq!(merge(&[1, 9, 1], &[0, 1]), vec![0, 1, 9, 1]);
    }

    #[test]
    fn test_repeated_anchor_in_update() {
        assert_eq!(merge(&[1, 2], &[5, 1, 6, 1]), vec![5, 6, 1, 2]);
    }

    #[test]
    fn test_repeated_new_item_is_inserted_each_time() {
        assert_eq!(merge(&[1], &[7, 1, 7]), vec![7, 1, 7]);
    }

    #[test]
    fn test_strict_moves_items() {
        let mut update = vec![String::from("z"), String::from("a")];
        let merged = merge_strict(&[String::from("a")], &mut update);
        assert_eq!(merged, vec!["z", "a"]);
        assert!(update.is_empty());
    }

    #[test]
    fn test_non_strict_options_leave_update() {
        let mut update = vec![3, 1, 2];
        let merged = merge_with_options(&[1], &mut update, &MergeOptions::new());
        assert_eq!(merged, vec![3, 1, 2]);
        assert_eq!(update, vec![3, 1, 2]);
    }
}
