//! Output formatting for benchmark rows and values.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use fibdrv_core::fixed::Variant;

/// Format of benchmark output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One whitespace-separated row per offset.
    Text,
    /// A JSON array of samples.
    Json,
    /// Timings only, one row per offset, without the offset column.
    Raw,
}

/// Timings of the fixed-width variants at one offset.
///
/// A variant that was not selected has no timing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSample {
    pub offset: i64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub iterative_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fast_doubling_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fast_doubling_clz_ns: Option<u64>,
}

impl TimingSample {
    #[must_use]
    pub fn new(offset: i64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Record the timing of `variant`.
    pub fn record(&mut self, variant: Variant, elapsed_ns: u64) {
        let slot = match variant {
            Variant::Iterative => &mut self.iterative_ns,
            Variant::FastDoubling => &mut self.fast_doubling_ns,
            Variant::FastDoublingClz => &mut self.fast_doubling_clz_ns,
        };
        *slot = Some(elapsed_ns);
    }

    /// Recorded timings in selector order.
    pub fn timings(&self) -> impl Iterator<Item = u64> + '_ {
        [
            self.iterative_ns,
            self.fast_doubling_ns,
            self.fast_doubling_clz_ns,
        ]
        .into_iter()
        .flatten()
    }
}

/// Format one text row: the offset followed by each recorded timing.
#[must_use]
pub fn format_row(sample: &TimingSample) -> String {
    let timings = format_timings(sample);
    if timings.is_empty() {
        sample.offset.to_string()
    } else {
        format!("{} {timings}", sample.offset)
    }
}

/// Space-separated recorded timings of one sample.
#[must_use]
pub fn format_timings(sample: &TimingSample) -> String {
    let mut row = String::new();
    for ns in sample.timings() {
        if !row.is_empty() {
            row.push(' ');
        }
        row.push_str(&ns.to_string());
    }
    row
}

/// Write all samples in the given format.
pub fn write_samples<W: Write>(
    out: &mut W,
    samples: &[TimingSample],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            for sample in samples {
                writeln!(out, "{}", format_row(sample))?;
            }
        }
        OutputFormat::Raw => {
            for sample in samples {
                writeln!(out, "{}", format_timings(sample))?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(samples).map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()
}

/// Format a value line: `F(i) = digits`, or only the digits when quiet.
#[must_use]
pub fn format_value(position: i64, digits: &[u8], quiet: bool) -> String {
    let digits = String::from_utf8_lossy(digits);
    if quiet {
        digits.into_owned()
    } else {
        format!("F({position}) = {digits}")
    }
}
