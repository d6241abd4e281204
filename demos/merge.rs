//! Flat merges, strict merges and reference sorting.
//!
//! Run with: cargo run --example merge

use serde::Serialize;
use seqmerge::{
    merge, merge_strict, seq, sort_records_by_reference, SortOptions, Value,
};
use std::error::Error;

#[derive(Debug, Clone, Serialize)]
struct Step {
    name: String,
    minutes: u32,
}

fn show(items: &[Value]) -> String {
    Value::Array(items.to_vec()).to_string()
}

fn main() -> Result<(), Box<dyn Error>> {
    // Private items stay put, new ones are slotted next to shared anchors
    let source = seq![2, "b", 1, "a"];
    let update = seq![5, 3, 6, 7, 1, 2, 4];
    println!("source:  {}", show(&source));
    println!("update:  {}", show(&update));
    println!("merged:  {}\n", show(&merge(&source, &update)));

    // A strict merge moves the placed items out of the update
    let mut pending = seq![3, 1, 2];
    let merged = merge_strict(&seq![1, "a"], &mut pending);
    println!("strict merged: {}", show(&merged));
    println!("left in update: {}\n", show(&pending));

    // Merge two playlists, then order records by the merged playlist
    let order = merge(&seq!["prep", "bake"], &seq!["prep", "mix", "bake", "cool"]);
    println!("order: {}", show(&order));

    let steps = vec![
        Step { name: "cool".into(), minutes: 30 },
        Step { name: "bake".into(), minutes: 45 },
        Step { name: "prep".into(), minutes: 10 },
        Step { name: "mix".into(), minutes: 5 },
    ];
    for step in sort_records_by_reference(&steps, &order, "name", &SortOptions::new())? {
        println!("  {:<5} {:>3} min", step.name, step.minutes);
    }

    Ok(())
}
