use std::process::ExitCode;

/// How a docview command ended, mapped onto the process exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every input resolved, or the requested file was written.
    Success,
    /// The command declined to act, such as `init` finding an existing
    /// `.docviewrc.json`. Nothing was changed.
    Failure,
    /// Unreadable or malformed input: a missing path, a broken declaration
    /// document, or an invalid config.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::exit_status::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }
}
