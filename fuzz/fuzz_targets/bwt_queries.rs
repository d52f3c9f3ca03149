#![no_main]
use bwtx::Bwt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (mut text, pattern) = data;
    text.retain(|&b| b != 0);
    if text.len() > 1024 || pattern.len() > 16 {
        return;
    }

    let bwt = Bwt::new(&text).unwrap();

    // Cross-check count/locate against a naive scan
    let expected = if pattern.is_empty() {
        text.len() + 1
    } else {
        text.windows(pattern.len())
            .filter(|w| *w == &pattern[..])
            .count()
    };
    assert_eq!(bwt.count(&pattern), expected);
    assert_eq!(bwt.locate(&pattern).len(), expected);

    // The index must always reproduce its input
    assert_eq!(bwt.extract(0, text.len()).unwrap(), text);
});
