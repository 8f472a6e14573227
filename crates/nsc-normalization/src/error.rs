use thiserror::Error;

/// A value did not match the format its column requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {expected} value")]
pub struct FormatError {
    pub value: String,
    pub expected: &'static str,
}

impl FormatError {
    pub fn new(value: impl Into<String>, expected: &'static str) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}
