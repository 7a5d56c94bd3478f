//! Fuzz target for loading a map source from JSON.
//!
//! Any input must either parse or produce an error; every loaded key must
//! resolve to its own message.

#![no_main]

use libfuzzer_sys::fuzz_target;
use msgbundle_core::{MapSource, MessageSource};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(source) = MapSource::from_json(text) {
        for key in source.keys() {
            assert_eq!(source.lookup(key).as_deref(), source.get(key));
        }
    }
});
