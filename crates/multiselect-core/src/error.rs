//! Error types for multiselect.

/// Errors raised by the selection machinery.
///
/// Programming errors (such as a zero-length insertion reported to the
/// selection store) are not represented here; those panic at the call site.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// The list reported a move, which selection tracking cannot follow.
    #[error("moving {count} item(s) from position {from} to {to} is not supported")]
    UnsupportedMove {
        /// First position of the moved range.
        from: usize,
        /// Destination position.
        to: usize,
        /// Number of moved items.
        count: usize,
    },

    /// The manager was entered again from inside one of its own notifications.
    #[error("selection manager re-entered while a notification was in progress")]
    Reentrant,
}

/// A specialized Result type for selection operations.
pub type Result<T> = std::result::Result<T, SelectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_move_message() {
        let err = SelectionError::UnsupportedMove {
            from: 2,
            to: 7,
            count: 3,
        };
        assert_eq!(
            err.to_string(),
            "moving 3 item(s) from position 2 to 7 is not supported"
        );
    }

    #[test]
    fn test_reentrant_message() {
        assert!(SelectionError::Reentrant.to_string().contains("re-entered"));
    }
}
