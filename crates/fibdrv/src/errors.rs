//! Error handling and exit codes.

use fibdrv_core::constants::exit_codes;
use fibdrv_core::error::FibError;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::Busy => exit_codes::ERROR_BUSY,
        FibError::CapacityExceeded { .. } => exit_codes::ERROR_CAPACITY,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::InvalidNumber(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
