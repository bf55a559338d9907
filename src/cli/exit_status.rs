use std::process::ExitCode;

/// Process exit status of a `plate` command.
///
/// A load or resolution error is reported as [`ExitStatus::Failure`];
/// [`ExitStatus::Error`] is kept for failures outside the locale files,
/// such as an unreadable working directory or a broken `.platerc.json`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status of a load that succeeded with `warnings` warnings.
    pub fn for_loaded(warnings: usize, deny_warnings: bool) -> Self {
        if deny_warnings && warnings > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
