//! CLI exit code handling.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Recoverable error
//! - 2: Corrupt catalog data

use std::process::ExitCode;

use emoji_algebra_core::AlgebraError;

/// Exit codes for CLI commands.
///
/// Exit 2 is reserved for catalog data that cannot be trusted; everything
/// else the user can fix by changing arguments or files is exit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    /// Recoverable error - bad input, missing file, nothing to match
    Warning = 1,
    /// Corrupt catalog - regenerate the data before retrying
    Blocking = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&AlgebraError> for CliExitCode {
    fn from(err: &AlgebraError) -> Self {
        match err {
            // An empty recipe is a valid state, not a failure
            AlgebraError::EmptyEquation => CliExitCode::Success,
            e if e.is_corruption() => CliExitCode::Blocking,
            _ => CliExitCode::Warning,
        }
    }
}

/// Exit code for a core error.
#[inline]
pub fn exit_code_for_algebra_error(err: &AlgebraError) -> CliExitCode {
    CliExitCode::from(err)
}

/// Exit code for any command error.
///
/// Walks the context chain looking for an [`AlgebraError`]; anything else
/// is recoverable.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<AlgebraError>())
        .map(CliExitCode::from)
        .unwrap_or(CliExitCode::Warning)
}
