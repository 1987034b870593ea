use std::process::ExitCode;

/// Exit status for the calcmcp binary.
///
/// - `Success` (0): Clean shutdown of the server or a completed CLI command
/// - `Error` (1): Transport connection failure at startup or an internal error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed due to internal error (transport failure, bad arguments).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}
