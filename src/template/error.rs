/*!
The error type for URI Template parsing: a smaller, template-only counterpart to
[`crate::error::Error`], sharing the same three-field shape (`message`, `input`, `offset`) so both
error types satisfy the same external contract.
*/

use std::fmt;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A URI Template parse failure.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UriTemplateError {
    message: String,
    input: String,
    offset: usize,
}

impl UriTemplateError {
    pub(crate) fn new<S: Into<String>>(message: S, input: &str, offset: usize) -> Self {
        UriTemplateError {
            message: message.into(),
            input: input.to_string(),
            offset,
        }
    }

    /// The human-readable description of what went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full input string being parsed when the error occurred.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The byte offset into [`Self::input`] at which parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for UriTemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (at byte offset {} in `{}`)",
            self.message, self.offset, self.input
        )
    }
}

impl std::error::Error for UriTemplateError {}

/// The result type returned by every fallible template operation.
pub type Result<T> = std::result::Result<T, UriTemplateError>;
