#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use strmatch::search::Algorithm;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
}

fuzz_target!(|input: Input<'_>| {
    // Every matcher must agree with memmem and never panic
    let expected = if input.pattern.is_empty() {
        None
    } else {
        memchr::memmem::find(input.text, input.pattern)
    };
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.find(input.text, input.pattern), expected, "{}", algorithm);
    }
});
