//! Errors reported by buffer and editor operations.

use thiserror::Error;

/// Caller-input errors. Every failing operation leaves its buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The end of a range precedes its start.
    #[error("range end {end} precedes start {start}")]
    ReversedRange {
        /// Requested start offset.
        start: usize,
        /// Requested end offset.
        end: usize,
    },

    /// The start offset lies beyond the end of the document.
    #[error("index {index} lies beyond document length {len}")]
    OutOfBounds {
        /// Requested offset.
        index: usize,
        /// Document length in characters.
        len: usize,
    },

    /// A signed offset was negative.
    #[error("negative index {0}")]
    NegativeIndex(isize),

    /// A required argument was absent.
    #[error("missing {0}")]
    MissingArgument(&'static str),
}

impl BufferError {
    /// Whether the error reports an unusable range or offset.
    ///
    /// Everything except [`BufferError::MissingArgument`] falls in this
    /// category.
    pub const fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            Self::ReversedRange { .. } | Self::OutOfBounds { .. } | Self::NegativeIndex(_)
        )
    }
}

/// Result alias for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BufferError::ReversedRange { start: 5, end: 2 };
        assert_eq!(err.to_string(), "range end 2 precedes start 5");

        let err = BufferError::OutOfBounds { index: 9, len: 4 };
        assert_eq!(err.to_string(), "index 9 lies beyond document length 4");

        assert_eq!(BufferError::NegativeIndex(-1).to_string(), "negative index -1");
        assert_eq!(
            BufferError::MissingArgument("clipboard").to_string(),
            "missing clipboard"
        );
    }

    #[test]
    fn test_invalid_range_category() {
        assert!(BufferError::ReversedRange { start: 1, end: 0 }.is_invalid_range());
        assert!(BufferError::OutOfBounds { index: 1, len: 0 }.is_invalid_range());
        assert!(BufferError::NegativeIndex(-3).is_invalid_range());
        assert!(!BufferError::MissingArgument("clipboard").is_invalid_range());
    }
}
