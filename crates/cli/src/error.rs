//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `EnvError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use dotbind_config::EnvError;

/// Structured exit codes for dotbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The dotenv file could not be read.
    ///
    /// Scripts should check the path or `DOTBIND_FILE`.
    IoError = 2,

    /// Key not found, or a value index past the end of a multi-value key.
    NotFound = 4,

    /// A value could not be coerced to the requested type.
    ///
    /// Scripts should fix the file and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        match err {
            EnvError::Read { .. } => ExitCode::IoError,
            EnvError::KeyAbsent { .. } | EnvError::IndexOutOfRange { .. } => ExitCode::NotFound,
            EnvError::Coercion { .. } => ExitCode::ValidationError,
            EnvError::NotLoaded => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no `EnvError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<EnvError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
