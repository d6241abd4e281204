//! Merging sequences of nested sequences.
//!
//! [`merge_nested`] encodes both sides with the boundary codec, merges the
//! token streams with [`merge`], and decodes the result. Because group
//! markers with the same index compare equal, group boundaries take part in
//! the merge like any other anchor: a scalar keeps the group it has in the
//! source, and new scalars join the group the update puts them next to.
//!
//! Groups the source does not have (the update has more of them) never add
//! structure unless the source had no groups at all. A group holding only
//! new items is folded into the source group that closes right before it;
//! any other such group is dissolved and its contents stay where the merge
//! put them.
//!
//! ```rust
//! use seqmerge::{merge_nested, seq};
//!
//! assert_eq!(merge_nested(&seq![[]], &seq![[1], [2]]), seq![[1, 2]]);
//! assert_eq!(merge_nested(&seq![[2]], &seq![[1], [2]]), seq![[2, 1]]);
//! ```

use crate::boundary::{boundary_count, decode, encode, Token};
use crate::{merge, Nestable};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Merges two sequences of nested sequences.
///
/// Neither input is modified.
#[must_use]
pub fn merge_nested<T>(source: &[T], update: &[T]) -> Vec<T>
where
    T: Nestable + Clone + Eq + Hash,
{
    let source_tokens = encode(source);
    let groups = boundary_count(&source_tokens);
    let merged = merge(&source_tokens, &encode(update));
    if groups == 0 {
        return decode(merged);
    }
    decode(fold_foreign_groups(merged, &source_tokens, groups))
}

/// Foreign groups whose contents are all new items, up to their `Close`.
fn foldable_groups<T: Eq + Hash>(
    tokens: &[Token<T>],
    known: &HashSet<&T>,
    groups: usize,
) -> HashSet<usize> {
    let mut foldable = HashSet::new();
    for (start, token) in tokens.iter().enumerate() {
        let &Token::Open(index) = token else {
            continue;
        };
        if index < groups {
            continue;
        }
        let rest = &tokens[start + 1..];
        let Some(len) = rest
            .iter()
            .position(|t| matches!(t, Token::Close(i) if *i == index))
        else {
            continue;
        };
        let only_new = rest[..len].iter().all(|t| match t {
            Token::Item(item) => !known.contains(item),
            Token::Open(_) | Token::Close(_) => false,
        });
        if only_new {
            foldable.insert(index);
        }
    }
    foldable
}

/// Dissolves the groups with an index the source does not have.
///
/// A foreign group of new items opening at the top level right after a
/// source group closed reopens that source group. Any other foreign marker
/// is dropped and its contents stay where the merge put them, so source
/// items never change depth.
fn fold_foreign_groups<T: Eq + Hash>(
    tokens: Vec<Token<T>>,
    source: &[Token<T>],
    groups: usize,
) -> Vec<Token<T>> {
    let known: HashSet<&T> = source
        .iter()
        .filter_map(|token| match token {
            Token::Item(item) => Some(item),
            Token::Open(_) | Token::Close(_) => None,
        })
        .collect();
    let foldable = foldable_groups(&tokens, &known, groups);

    let mut folded = Vec::with_capacity(tokens.len());
    let mut reopened: HashMap<usize, usize> = HashMap::new();
    let mut depth = 0usize;
    let mut foreign = 0usize;

    for token in tokens {
        match token {
            Token::Open(index) if index >= groups => {
                foreign += 1;
                if depth == 0 && foldable.contains(&index) {
                    if let Some(&Token::Close(previous)) = folded.last() {
                        folded.pop();
                        reopened.insert(index, previous);
                        depth += 1;
                    }
                }
            }
            Token::Close(index) if index >= groups => {
                if let Some(previous) = reopened.remove(&index) {
                    folded.push(Token::Close(previous));
                    depth = depth.saturating_sub(1);
                }
            }
            Token::Open(_) => {
                depth += 1;
                folded.push(token);
            }
            Token::Close(_) => {
                depth = depth.saturating_sub(1);
                folded.push(token);
            }
            Token::Item(_) => folded.push(token),
        }
    }

    if foreign > 0 {
        log::debug!(
            "merge_nested: folded {} foreign groups into {} source groups",
            foreign,
            groups
        );
    }
    folded
}

/// Splices nested sequences into their parent, one level deep.
///
/// # Examples
///
/// ```rust
/// use seqmerge::{flatten_once, seq, value};
///
/// assert_eq!(flatten_once(&seq!["go", ["for", ["it"]]]), seq!["go", "for", ["it"]]);
/// assert_eq!(
///     flatten_once(&seq!["go", [1, 2], { "it": "dude" }]),
///     seq!["go", 1, 2, { "it": "dude" }]
/// );
/// ```
#[must_use]
pub fn flatten_once<T>(seq: &[T]) -> Vec<T>
where
    T: Nestable + Clone,
{
    let mut flat = Vec::with_capacity(seq.len());
    for item in seq {
        match item.as_sequence() {
            Some(children) => flat.extend_from_slice(children),
            None => flat.push(item.clone()),
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seq, value, Value};
    use pretty_assertions::assert_eq;

    fn item(v: Value) -> Token<Value> {
        Token::Item(v)
    }

    #[test]
    fn test_fold_reopens_preceding_group() {
        let tokens = vec![
            Token::Open(0),
            item(value!(1)),
            Token::Close(0),
            Token::Open(1),
            item(value!(2)),
            Token::Close(1),
        ];
        assert_eq!(
            fold_foreign_groups(tokens, &encode(&seq![[1]]), 1),
            vec![Token::Open(0), item(value!(1)), item(value!(2)), Token::Close(0)]
        );
    }

    #[test]
    fn test_fold_drops_foreign_markers_inside_groups() {
        let tokens = vec![
            Token::Open(0),
            Token::Open(1),
            item(value!(2)),
            Token::Close(1),
            item(value!(1)),
            Token::Close(0),
        ];
        assert_eq!(
            fold_foreign_groups(tokens, &encode(&seq![[1]]), 1),
            vec![Token::Open(0), item(value!(2)), item(value!(1)), Token::Close(0)]
        );
    }

    #[test]
    fn test_fold_keeps_contents_without_preceding_group() {
        let tokens = vec![
            item(value!("x")),
            Token::Open(3),
            item(value!(9)),
            Token::Close(3),
            Token::Open(0),
            Token::Close(0),
        ];
        assert_eq!(
            fold_foreign_groups(tokens, &encode(&seq!["x", []]), 1),
            vec![
                item(value!("x")),
                item(value!(9)),
                Token::Open(0),
                Token::Close(0)
            ]
        );
    }

    #[test]
    fn test_fold_leaves_source_items_in_place() {
        let tokens = vec![
            Token::Open(0),
            item(value!(1)),
            Token::Close(0),
            Token::Open(1),
            item(value!("s")),
            Token::Close(1),
        ];
        assert_eq!(
            fold_foreign_groups(tokens, &encode(&seq![[1], "s"]), 1),
            vec![Token::Open(0), item(value!(1)), Token::Close(0), item(value!("s"))]
        );
    }

    #[test]
    fn test_fold_skips_group_closed_before_it_opens() {
        let tokens = vec![
            Token::Open(0),
            Token::Close(0),
            Token::Close(1),
            Token::Open(1),
            item(value!(2)),
        ];
        assert_eq!(
            fold_foreign_groups(tokens, &encode(&seq![[]]), 1),
            vec![Token::Open(0), Token::Close(0), item(value!(2))]
        );
    }

    #[test]
    fn test_source_groups_survive_foreign_group_around_them() {
        assert_eq!(
            merge_nested(&seq![[1], "s", [2]], &seq![[], [], ["s", 2]]),
            seq![[1], "s", [2]]
        );
    }

    #[test]
    fn test_source_without_groups_keeps_update_groups() {
        assert_eq!(merge_nested(&seq![], &seq![[1], [2]]), seq![[1], [2]]);
    }

    #[test]
    fn test_mixed_scalars_and_groups() {
        assert_eq!(
            merge_nested(&seq!["a", [1]], &seq!["a", [1, 2], "b"]),
            seq!["a", [1, 2], "b"]
        );
    }

    #[test]
    fn test_flatten_once_flat_input() {
        assert_eq!(flatten_once(&seq!["go", "for", "it"]), seq!["go", "for", "it"]);
    }
}
