use pretty_assertions::assert_eq;
use seqmerge::{merge, merge_strict, merge_with_options, seq, MergeOptions, SequenceExt, Value};
use test_case::test_case;

#[test_case(seq![], seq![1, 2], seq![1, 2] ; "empty source")]
#[test_case(seq!["a"], seq![1, 2], seq!["a", 1, 2] ; "no anchors appends")]
#[test_case(seq![1, "a"], seq![1, 2], seq![1, 2, "a"] ; "trailing after anchor")]
#[test_case(seq![1, "a"], seq![3, 1, 2], seq![3, 1, 2, "a"] ; "around one anchor")]
#[test_case(seq!["b", 1, "a"], seq![3, 1, 2], seq!["b", 3, 1, 2, "a"] ; "private head stays")]
#[test_case(seq![2, "b", 1, "a"], seq![3, 1, 2], seq![2, "b", 3, 1, "a"] ; "anchors keep source order")]
#[test_case(seq![2, "b", 1, "a"], seq![3, 1, 2, 4], seq![2, 4, "b", 3, 1, "a"] ; "tail follows last anchor")]
#[test_case(
    seq![2, "b", 1, "a"],
    seq![5, 3, 6, 7, 1, 2, 4],
    seq![2, 4, "b", 5, 3, 6, 7, 1, "a"]
    ; "runs stay contiguous"
)]
#[test_case(seq![1, 2], seq![], seq![1, 2] ; "empty update")]
#[test_case(seq![], seq![], seq![] ; "both empty")]
fn test_merge(source: Vec<Value>, update: Vec<Value>, expected: Vec<Value>) {
    assert_eq!(merge(&source, &update), expected);
}

#[test]
fn test_merge_does_not_touch_inputs() {
    let source = seq![2, "b", 1, "a"];
    let update = seq![3, 1, 2];
    let _ = merge(&source, &update);
    assert_eq!(source, seq![2, "b", 1, "a"]);
    assert_eq!(update, seq![3, 1, 2]);
}

#[test]
fn test_strict_consumes_update() {
    let mut update = seq![3, 1, 2];
    assert_eq!(merge_strict(&seq![1, "a"], &mut update), seq![3, 1, 2, "a"]);
    assert_eq!(update, seq![]);
}

// Unresolved upstream: the reference behaviour disagrees on whether a strict
// merge without shared anchors drains the update. This pins a policy choice
// that matches the `[]` with `[1, 2]` case: both sides are left alone.
#[test]
fn test_strict_without_anchors() {
    let mut update = seq![1, 2];
    assert_eq!(merge_strict(&seq![], &mut update), seq![]);
    assert_eq!(update, seq![1, 2]);

    let mut update = seq![1, 2];
    assert_eq!(merge_strict(&seq!["a"], &mut update), seq!["a"]);
    assert_eq!(update, seq![1, 2]);
}

#[test]
fn test_options_select_mode() {
    let mut update = seq![3, 1, 2];
    let merged = merge_with_options(&seq![1, "a"], &mut update, &MergeOptions::new());
    assert_eq!(merged, seq![3, 1, 2, "a"]);
    assert_eq!(update, seq![3, 1, 2]);

    let options = MergeOptions::new().with_strict(true);
    let merged = merge_with_options(&seq![1, "a"], &mut update, &options);
    assert_eq!(merged, seq![3, 1, 2, "a"]);
    assert!(update.is_empty());
}

#[test]
fn test_merge_plain_types() {
    let source = vec!["intro", "chorus", "outro"];
    let update = vec!["intro", "verse", "chorus", "bridge"];
    assert_eq!(
        merge(&source, &update),
        vec!["intro", "verse", "chorus", "bridge", "outro"]
    );
}

#[test]
fn test_merged_method() {
    let source = seq!["b", 1, "a"];
    assert_eq!(source.merged(&seq![3, 1, 2]), seq!["b", 3, 1, 2, "a"]);
}

#[test]
fn test_integer_and_float_are_distinct() {
    assert_eq!(merge(&seq![1], &seq![1.0]), seq![1, 1.0]);
}
