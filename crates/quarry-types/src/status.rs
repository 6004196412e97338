//! Dispatch outcome types: status codes and the result pair.

use serde::{Deserialize, Serialize};

/// Status returned by a command's execute step, mapped verbatim onto the
/// process exit code by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    /// Work finished, nothing left to do.
    Done,
    /// Work failed; the message list explains why.
    Error,
    /// Validation and setup succeeded; the driver proceeds to the next
    /// stage (transaction commit).
    MoreWork,
    /// Distinguished `check-update` signal: updates exist. Not an error.
    UpdatesAvailable,
}

impl ExitStatus {
    /// Numeric process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Done => 0,
            ExitStatus::Error => 1,
            ExitStatus::MoreWork => 2,
            ExitStatus::UpdatesAvailable => 100,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, ExitStatus::Error)
    }
}

/// The `(status, messages)` pair produced once per dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub status: ExitStatus,
    /// User-facing messages, in detection order.
    pub messages: Vec<String>,
}

impl DispatchResult {
    /// Successful completion with no output.
    pub fn done() -> Self {
        Self {
            status: ExitStatus::Done,
            messages: Vec::new(),
        }
    }

    /// Successful completion with a message for the user.
    pub fn done_with(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::Done,
            messages: vec![message.into()],
        }
    }

    /// Failure with a single explanatory message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ExitStatus::Error,
            messages: vec![message.into()],
        }
    }

    /// Failure with several reasons, preserving detection order.
    pub fn errors(messages: Vec<String>) -> Self {
        Self {
            status: ExitStatus::Error,
            messages,
        }
    }

    /// Setup succeeded and a transaction is ready for the next stage.
    pub fn more_work() -> Self {
        Self {
            status: ExitStatus::MoreWork,
            messages: Vec::new(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_contract() {
        assert_eq!(ExitStatus::Done.code(), 0);
        assert_eq!(ExitStatus::Error.code(), 1);
        assert_eq!(ExitStatus::MoreWork.code(), 2);
        assert_eq!(ExitStatus::UpdatesAvailable.code(), 100);
    }

    #[test]
    fn updates_available_is_not_an_error() {
        assert!(!ExitStatus::UpdatesAvailable.is_error());
        assert!(ExitStatus::Error.is_error());
    }

    #[test]
    fn constructors_set_status_and_messages() {
        assert_eq!(DispatchResult::done().exit_code(), 0);
        assert!(DispatchResult::done().messages.is_empty());

        let res = DispatchResult::error("broken");
        assert_eq!(res.exit_code(), 1);
        assert_eq!(res.messages, vec!["broken".to_string()]);

        assert_eq!(DispatchResult::more_work().exit_code(), 2);
    }

    #[test]
    fn errors_preserve_detection_order() {
        let res = DispatchResult::errors(vec!["first".into(), "second".into()]);
        assert_eq!(res.messages, vec!["first".to_string(), "second".to_string()]);
    }
}
