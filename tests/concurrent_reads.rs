//! Concurrent resolution against a shared bundle.

use msgbundle::prelude::*;
use std::sync::Arc;

fn numbered_bundle(sources: usize) -> MessageBundle {
    let mut builder = MessageBundle::builder();
    for i in 0..sources {
        let source: MapSource = (0..10)
            .map(|j| (format!("key{}", i * 10 + j), format!("source{}", i)))
            .collect();
        builder.append_source(Arc::new(source));
    }
    builder.build()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolution() {
    let bundle = Arc::new(numbered_bundle(8));

    let mut handles = Vec::new();
    for task in 0..32 {
        let bundle = Arc::clone(&bundle);
        handles.push(tokio::spawn(async move {
            for n in 0..200 {
                let index = (task * 7 + n) % 100;
                let key = format!("key{}", index);
                let resolved = bundle.resolve(&key);

                if index < 80 {
                    assert_eq!(resolved, format!("source{}", index / 10));
                } else {
                    assert_eq!(resolved, key);
                }
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_derivation_while_reading() {
    let base = numbered_bundle(2);

    let reader = {
        let base = base.clone();
        tokio::spawn(async move {
            for _ in 0..500 {
                assert_eq!(base.resolve("key0"), "source0");
                assert_eq!(base.resolve("key99"), "key99");
            }
        })
    };

    let writer = {
        let base = base.clone();
        tokio::spawn(async move {
            let mut builder = base.derive_builder();
            for i in 0..50 {
                let source: SharedSource =
                    Arc::new(MapSource::builder().put("key0", format!("override{}", i)).build());
                builder.prepend_source(source);
            }
            builder.build()
        })
    };

    reader.await.unwrap();
    let derived = writer.await.unwrap();

    assert_eq!(derived.resolve("key0"), "override49");
    assert_eq!(base.resolve("key0"), "source0");
    assert_eq!(base.len(), 2);
}
