// src/exit.rs
//! Process exit codes for `jsdepth`.

use std::process::Termination;

use crate::types::ScanReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum JsDepthExit {
    /// Every input was scored.
    Success = 0,
    /// Generic error (IO, config, grammar).
    Error = 1,
    /// At least one input was rejected (parse failure, size or nesting limit).
    InvalidInput = 2,
}

impl JsDepthExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for JsDepthExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&ScanReport> for JsDepthExit {
    fn from(report: &ScanReport) -> Self {
        if report.has_unreadable() {
            Self::Error
        } else if report.has_failures() {
            Self::InvalidInput
        } else {
            Self::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileScore, ScanReport};
    use crate::error::ScoreError;
    use std::path::PathBuf;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(JsDepthExit::Success.code(), 0);
        assert_eq!(JsDepthExit::Error.code(), 1);
        assert_eq!(JsDepthExit::InvalidInput.code(), 2);
    }

    #[test]
    fn test_unreadable_outranks_invalid() {
        let parse = ScoreError::Parse { line: 1, column: 1 };
        let io = ScoreError::Io {
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
            path: PathBuf::from("gone.js"),
        };
        let report = ScanReport::from_files(
            vec![
                FileScore::failed(PathBuf::from("bad.js"), &parse),
                FileScore::failed(PathBuf::from("gone.js"), &io),
            ],
            0,
        );
        assert_eq!(JsDepthExit::from(&report), JsDepthExit::Error);
        assert_eq!(JsDepthExit::from(&ScanReport::default()), JsDepthExit::Success);
    }
}
