//! One-line outcome messages for commands that produce no other output.

use std::fmt;

/// How an outcome line is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The requested change was made
    Success,
    /// Nothing to do, e.g. no plan is active yet
    Notice,
}

impl StatusKind {
    fn label(self) -> &'static str {
        match self {
            Self::Success => "Success:",
            Self::Notice => "Note:",
        }
    }
}

/// A labelled outcome line.
pub struct OperationStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Success, message)
    }

    pub fn notice(message: impl Into<String>) -> Self {
        Self::with_kind(StatusKind::Notice, message)
    }

    fn with_kind(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.kind.label(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(
            OperationStatus::success("Active plan set").to_string(),
            "Success: Active plan set\n"
        );
        assert_eq!(
            OperationStatus::notice("No active plan").to_string(),
            "Note: No active plan\n"
        );
    }
}
