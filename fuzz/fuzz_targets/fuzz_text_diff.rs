//! Fuzz target for the prefix/suffix diff.
//!
//! Any pair of strings must diff without panicking, and applying the diff
//! must reproduce the second string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use text_diff_binding::TextDiff;

fuzz_target!(|input: (&str, &str)| {
    let (previous, current) = input;
    let diff = TextDiff::compute(previous, current);

    assert_eq!(diff.apply(previous), current);
    assert_eq!(diff.invert().apply(current), previous);
    assert_eq!(diff.is_empty(), previous == current);

    let shorter = previous.chars().count().min(current.chars().count());
    assert!(diff.start + diff.end <= shorter);
});
