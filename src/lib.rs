//! Golden data shared by the workspace integration tests.
//!
//! `tests/testdata/fibonacci_golden.json` holds exact decimal expansions and
//! their 64-bit two's-complement reductions.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
    pub fixed: Vec<FixedEntry>,
}

/// An exact value, or a prefix and digit count for values too long to inline.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<String>,
    #[serde(default)]
    pub fib_prefix: Option<String>,
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

/// F(n) reduced modulo 2^64 into `i64`.
#[derive(Debug, Deserialize)]
pub struct FixedEntry {
    pub n: u32,
    pub wrapped: i64,
}

pub fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/fibonacci_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}
