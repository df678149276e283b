#![no_main]

use libfuzzer_sys::fuzz_target;

use fibdrv_core::fixed::{FastDoubling, FastDoublingClz, FixedFib, Iterative};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let k = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    let fast = FastDoubling.compute(k);
    assert_eq!(fast, FastDoublingClz.compute(k), "FastDoubling != FastDoublingClz at k={k}");

    // Iteration is linear, keep it to small k.
    let k = k % 100_000;
    assert_eq!(Iterative.compute(k), FastDoublingClz.compute(k), "Iterative != FastDoublingClz at k={k}");
});
