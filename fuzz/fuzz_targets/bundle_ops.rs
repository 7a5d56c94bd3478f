//! Fuzz target for builder operations.
//!
//! Replays arbitrary append/prepend/build sequences and checks resolution
//! against a plain vector model of the source order.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use msgbundle_core::{MapSource, MessageBundle, SharedSource};
use std::sync::Arc;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<(String, String)>),
    Prepend(Vec<(String, String)>),
    Build,
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
    keys: Vec<String>,
}

fn expected(model: &[Vec<(String, String)>], key: &str) -> String {
    model
        .iter()
        .find_map(|pairs| {
            // MapSource keeps the last value for duplicated keys
            pairs.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
        .unwrap_or_else(|| key.to_string())
}

fuzz_target!(|input: Input| {
    let mut builder = MessageBundle::builder();
    let mut model: Vec<Vec<(String, String)>> = Vec::new();
    let mut snapshots = Vec::new();

    for op in input.ops {
        match op {
            Op::Append(pairs) => {
                let source: SharedSource = Arc::new(pairs.iter().cloned().collect::<MapSource>());
                builder.append_source(source);
                model.push(pairs);
            }
            Op::Prepend(pairs) => {
                let source: SharedSource = Arc::new(pairs.iter().cloned().collect::<MapSource>());
                builder.prepend_source(source);
                model.insert(0, pairs);
            }
            Op::Build => snapshots.push((builder.build(), model.clone())),
        }
    }
    snapshots.push((builder.build(), model));

    for (bundle, model) in &snapshots {
        assert_eq!(bundle.len(), model.len());
        for key in &input.keys {
            assert_eq!(bundle.resolve(key), expected(model, key));
        }
    }
});
