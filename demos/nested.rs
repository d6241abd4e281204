//! Nested merges, the boundary codec and deep delete.
//!
//! Run with: cargo run --example nested

use seqmerge::boundary::{decode, encode, Token};
use seqmerge::{delete_recursive, merge_nested, seq, value, Value};

fn show(items: &[Value]) -> String {
    Value::Array(items.to_vec()).to_string()
}

fn describe(tokens: &[Token<Value>]) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Item(item) => item.to_string(),
            Token::Open(i) => format!("<{}", i),
            Token::Close(i) => format!("{}>", i),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() {
    // One level of nesting becomes a flat token stream
    let grouped = seq![1, [2, 3], 4, [[5]]];
    let tokens = encode(&grouped);
    println!("encoded: {}", describe(&tokens));
    println!("decoded: {}\n", show(&decode(tokens)));

    // Groups take part in the merge like any other item
    let cases = [
        (seq![[]], seq![[1], [2]]),
        (seq![[2]], seq![[1], [2]]),
        (seq![[2], []], seq![[1], [2]]),
        (seq![[1, 2], [3]], seq![[1], [2, 3]]),
    ];
    for (source, update) in &cases {
        println!(
            "{} + {} => {}",
            show(source),
            show(update),
            show(&merge_nested(source, update))
        );
    }

    // Remove a value wherever it occurs
    let mut list = seq!["one", "two", ["one", ["one", "three"]]];
    let removed = delete_recursive(&mut list, &value!("one"));
    println!("\nremoved {:?}, left {}", removed, show(&list));
}
