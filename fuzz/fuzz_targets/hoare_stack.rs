#![no_main]

use libfuzzer_sys::fuzz_target;

use hoare_quicksort::unstable::hoare_stack as test_sort;

fuzz_target!(|data: &[u8]| {
    let mut v = data
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect::<Vec<_>>();
    let mut expected = v.clone();

    test_sort::sort(&mut v);
    expected.sort();

    assert_eq!(v, expected);
});
