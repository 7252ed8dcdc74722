//! Exit codes for the lendsweep CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. These are stable.

/// Exit codes for lendsweep operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Sweep completed and report emitted.
    Ok = 0,

    /// Input document unreadable or structurally invalid.
    ConfigError = 10,

    /// Input document parsed but failed the evaluation contract.
    InputError = 11,

    /// Internal/unknown error.
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Ok)
    }
}

impl From<&lsw_common::Error> for ExitCode {
    fn from(err: &lsw_common::Error) -> Self {
        match err {
            lsw_common::Error::InvalidInput(_) => ExitCode::InputError,
            lsw_common::Error::Config(_)
            | lsw_common::Error::Io(_)
            | lsw_common::Error::Json(_) => ExitCode::ConfigError,
        }
    }
}
