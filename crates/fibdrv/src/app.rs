//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibdrv_core::error::FibError;
use fibdrv_core::fixed::Variant;
use fibdrv_device::{Device, Session, Whence};

use crate::config::{AppConfig, Command};
use crate::output::{format_value, write_samples, OutputFormat, TimingSample};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let device = Device::new(config.options());

    match &config.command {
        Command::Bench {
            max_offset,
            variants,
            format,
            output,
        } => run_bench(&device, *max_offset, variants, *format, output.as_deref()),
        Command::Read { from, to } => run_read(&device, *from, *to, config.quiet),
    }
}

fn run_bench(
    device: &Device,
    max_offset: i64,
    variants: &[Variant],
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let mut session = device.open()?;
    let samples = collect_samples(&mut session, max_offset, variants);
    session.close();

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_samples(&mut writer, &samples, format)?;
            info!(path = %path.display(), rows = samples.len(), "wrote samples");
        }
        None => write_samples(&mut io::stdout().lock(), &samples, format)?,
    }
    Ok(())
}

/// Seek to every offset in `0..=max_offset` and time each variant there.
///
/// Stops early once the session clamps the offset, so no position is
/// timed twice.
pub fn collect_samples(
    session: &mut Session<'_>,
    max_offset: i64,
    variants: &[Variant],
) -> Vec<TimingSample> {
    let mut samples = Vec::new();
    for i in 0..=max_offset {
        let offset = session.seek(i, Whence::Start);
        if offset != i {
            debug!(requested = i, offset, "offset clamped, stopping");
            break;
        }
        let mut sample = TimingSample::new(offset);
        for &variant in variants {
            sample.record(variant, session.write(variant.selector()));
        }
        samples.push(sample);
    }
    samples
}

fn run_read(device: &Device, from: i64, to: i64, quiet: bool) -> Result<()> {
    if from > to {
        return Err(FibError::Config(format!("--from ({from}) must be <= --to ({to})")).into());
    }

    let mut session = device.open()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut last = None;

    for i in from..=to {
        let position = session.seek(i, Whence::Start);
        if last == Some(position) {
            continue;
        }
        last = Some(position);
        let digits = session.read()?;
        writeln!(out, "{}", format_value(position, &digits, quiet))?;
    }

    session.close();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdrv_core::constants::MAX_POSITION;

    #[test]
    fn collect_all_offsets() {
        let device = Device::default();
        let mut session = device.open().unwrap();
        let samples = collect_samples(&mut session, 20, &Variant::ALL);
        assert_eq!(samples.len(), 21);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.offset, i as i64);
            assert_eq!(sample.timings().count(), 3);
        }
    }

    #[test]
    fn collect_stops_at_max_position() {
        let device = Device::default();
        let mut session = device.open().unwrap();
        let samples = collect_samples(&mut session, 10_000, &[Variant::FastDoublingClz]);
        assert_eq!(samples.len(), MAX_POSITION as usize + 1);
        assert_eq!(samples.last().unwrap().offset, MAX_POSITION);
    }

    #[test]
    fn collect_negative_max_is_empty() {
        let device = Device::default();
        let mut session = device.open().unwrap();
        assert!(collect_samples(&mut session, -1, &Variant::ALL).is_empty());
    }

    #[test]
    fn read_rejects_reversed_range() {
        let device = Device::default();
        let err = run_read(&device, 5, 1, true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FibError>(),
            Some(FibError::Config(_))
        ));
        assert!(!device.is_open());
    }

    #[test]
    fn bench_busy_device() {
        let device = Device::default();
        let _held = device.open().unwrap();
        let err = run_bench(&device, 1, &Variant::ALL, OutputFormat::Text, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<FibError>(), Some(FibError::Busy)));
    }
}
