use std::process::ExitCode;

/// Exit status of a `lingua` invocation.
///
/// - `Success` (0): the command did what was asked
/// - `Failure` (1): the command ran but the request could not be satisfied,
///   e.g. an unknown key for `locate` or an existing `.lingua` for `init`
/// - `Error` (2): configuration, I/O or parse error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
