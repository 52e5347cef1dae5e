#![no_main]

//! Command text fuzzer.
//!
//! Any text that parses as an action must render back to text that parses
//! to the same action.

use cellmind::game::Action;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(action) = text.parse::<Action>() else {
        return;
    };
    let rendered = action.to_string();
    let reparsed: Action = rendered
        .parse()
        .unwrap_or_else(|e| panic!("rendered {rendered:?} failed to parse: {e}"));
    assert_eq!(reparsed, action, "round trip changed {text:?}");
});
