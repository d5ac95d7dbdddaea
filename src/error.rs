use crate::types::DateFields;

/// Construction failed because the fields do not name a real calendar date-time.
///
/// The message renders every field zero-padded, e.g.
/// `2024-13-02 00:00:00.000 is not a valid date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid date")]
pub struct InvalidDate(pub DateFields);

impl InvalidDate {
    /// Returns the rejected fields
    pub const fn fields(&self) -> DateFields {
        self.0
    }
}

/// Error type for reading a date from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The text was well formed but named a date that does not exist.
    #[error(transparent)]
    InvalidDate(#[from] InvalidDate),
}
