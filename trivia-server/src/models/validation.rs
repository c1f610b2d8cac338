//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Value couldn't be parsed into the expected shape
    InvalidFormat { field: &'static str, reason: String },

    /// Reference to a record that doesn't exist
    UnknownReference { field: &'static str, id: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::OutOfRange {
                field,
                min,
                max,
                value,
            } => write!(f, "{} must be between {} and {}, got {}", field, min, max, value),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::UnknownReference { field, id } => {
                write!(f, "{} {} does not exist", field, id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "question",
            max: 1000,
        };
        assert_eq!(
            err.to_string(),
            "question exceeds maximum length of 1000 characters"
        );

        let err = ValidationError::OutOfRange {
            field: "difficulty",
            min: 1,
            max: 5,
            value: 9,
        };
        assert_eq!(err.to_string(), "difficulty must be between 1 and 5, got 9");

        let err = ValidationError::UnknownReference {
            field: "category",
            id: 42,
        };
        assert_eq!(err.to_string(), "category 42 does not exist");
    }
}
