//! fibdrv: benchmark client for Fibonacci sessions.

use fibdrv_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout carries only results.
    let level = config.log_level();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
