//! Status messages for operations without a resource to show.

use std::fmt;

/// Outcome line such as "Success: ..." or "Skipped: ...".
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    /// Nothing was changed, which is not an error
    Skipped,
    Failure,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Skipped,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            StatusKind::Success => "Success:",
            StatusKind::Skipped => "Skipped:",
            StatusKind::Failure => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}
