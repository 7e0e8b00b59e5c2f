//! Operation status codes.

use std::process::ExitCode;

/// Outcome of a whole-file operation, as a process-style status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Code 0
    Success,
    /// Code 1
    Failure,
}

impl Status {
    pub fn code(self) -> i32 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code() as u8)
    }
}
