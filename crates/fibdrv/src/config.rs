//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

use fibdrv_core::constants::DEFAULT_DIGIT_CAPACITY;
use fibdrv_core::fixed::Variant;
use fibdrv_core::options::Options;

use crate::output::OutputFormat;

/// fibdrv: time fixed-width Fibonacci variants and read exact values
/// through a position-addressed session.
#[derive(Parser, Debug)]
#[command(name = "fibdrv", version, about)]
pub struct AppConfig {
    /// Verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only output values and log errors only.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Maximum digits of a big-number result (0 = unlimited).
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_DIGIT_CAPACITY,
        env = "FIBDRV_DIGIT_CAPACITY"
    )]
    pub digit_capacity: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Time the fixed-width variants at every offset from 0 to `max_offset`.
    Bench {
        /// Last offset to time; positions past 500 are clamped.
        #[arg(long, default_value_t = 100)]
        max_offset: i64,

        /// Variants to time, comma separated (iter, fast, clz).
        #[arg(
            long,
            value_delimiter = ',',
            default_values = ["iter", "fast", "clz"],
            value_parser = parse_variant
        )]
        variants: Vec<Variant>,

        /// Output format (`raw` prints timings only, without the offset).
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print F(i) for every position from `from` to `to`.
    Read {
        /// First position.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i64,

        /// Last position.
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        to: i64,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Log level for stderr: `-v` wins over `-q`.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }

    /// Engine options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options::with_digit_capacity(self.digit_capacity)
    }
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse::<Variant>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibdrv").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn bench_defaults() {
        let config = parse(&["bench"]);
        assert_eq!(config.digit_capacity, DEFAULT_DIGIT_CAPACITY);
        match config.command {
            Command::Bench {
                max_offset,
                variants,
                format,
                output,
            } => {
                assert_eq!(max_offset, 100);
                assert_eq!(variants, Variant::ALL.to_vec());
                assert_eq!(format, OutputFormat::Text);
                assert!(output.is_none());
            }
            Command::Read { .. } => panic!("expected bench"),
        }
    }

    #[test]
    fn bench_variant_list() {
        let config = parse(&["bench", "--variants", "clz,iter"]);
        let Command::Bench { variants, .. } = config.command else {
            panic!("expected bench");
        };
        assert_eq!(variants, [Variant::FastDoublingClz, Variant::Iterative]);
    }

    #[test]
    fn unknown_variant_rejected() {
        let result = AppConfig::try_parse_from(["fibdrv", "bench", "--variants", "matrix"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_level_follows_flags() {
        assert_eq!(parse(&["bench"]).log_level(), Level::WARN);
        assert_eq!(parse(&["bench", "-q"]).log_level(), Level::ERROR);
        assert_eq!(parse(&["-v", "bench"]).log_level(), Level::DEBUG);
        assert_eq!(parse(&["-v", "-q", "read"]).log_level(), Level::DEBUG);
    }

    #[test]
    fn raw_format_parses() {
        let Command::Bench { format, .. } = parse(&["bench", "--format", "raw"]).command else {
            panic!("expected bench");
        };
        assert_eq!(format, OutputFormat::Raw);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["read", "--from", "-3", "--to", "5", "-q", "--digit-capacity", "0"]);
        assert!(config.quiet);
        assert_eq!(config.options(), Options::unlimited());
        let Command::Read { from, to } = config.command else {
            panic!("expected read");
        };
        assert_eq!((from, to), (-3, 5));
    }
}
