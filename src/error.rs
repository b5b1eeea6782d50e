//! Error types for note parsing and conversion.

use thiserror::Error;

/// Result type for conversions.
pub type NoteResult<T> = Result<T, NoteError>;

/// Errors that can occur while interpreting a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The value is neither a positive frequency nor a well-formed note name.
    #[error("Bad note: {input}")]
    InvalidNoteFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl NoteError {
    /// Reject `input` as neither a usable frequency nor a note name.
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidNoteFormat {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_contains_input() {
        let err = NoteError::invalid("Z9");
        assert_eq!(err.to_string(), "Bad note: Z9");
        assert_eq!(
            err,
            NoteError::InvalidNoteFormat {
                input: "Z9".to_string()
            }
        );
    }
}
