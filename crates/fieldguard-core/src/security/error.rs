//! Security-specific error types.

use super::action::Action;
use thiserror::Error;

/// Security-related errors.
///
/// Partial visibility is never an error: redacted fields and filtered
/// documents are reported as data. Only a missing action-level permission
/// aborts a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecurityError {
    /// No resolved level grants the action at all.
    #[error("permission denied: {action}")]
    PermissionDenied {
        /// The denied action.
        action: Action,
    },

    /// Action name not recognized.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Result type for security operations.
pub type SecurityResult<T> = Result<T, SecurityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SecurityError::PermissionDenied { action: Action::Find };
        assert_eq!(err.to_string(), "permission denied: find");

        let err = SecurityError::UnknownAction("update".to_string());
        assert!(err.to_string().contains("update"));
    }

    #[test]
    fn test_security_result() {
        let ok: SecurityResult<i32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: SecurityResult<i32> = Err(SecurityError::PermissionDenied {
            action: Action::Remove,
        });
        assert!(err.is_err());
    }
}
