//! Validation error taxonomy.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for validation rules.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A client-correctable validation failure.
///
/// Each variant names the offending field (see [`ValidationError::field`]) so
/// a presentation layer can highlight it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty or whitespace-only.
    #[error("the field {field} is required")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// A field exceeds its maximum trimmed length.
    #[error("the field {field} cannot exceed {max} characters")]
    FieldTooLong {
        /// Name of the oversized field.
        field: &'static str,
        /// Maximum allowed characters.
        max: usize,
    },

    /// A field that must hold a positive integer does not.
    #[error("the field {field} must be a positive integer")]
    InvalidInteger {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The trimmed title is shorter than the minimum.
    #[error("the title must be at least {min} characters long")]
    TitleTooShort {
        /// Minimum allowed characters.
        min: usize,
    },

    /// The trimmed title is longer than the maximum.
    #[error("the title cannot exceed {max} characters")]
    TitleTooLong {
        /// Maximum allowed characters.
        max: usize,
    },

    /// A non-empty description is shorter than the minimum.
    #[error("the description must be at least {min} characters long when provided")]
    DescriptionTooShort {
        /// Minimum allowed characters.
        min: usize,
    },

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// The due date lies before the current date.
    #[error("the due date {date} is before today ({today})")]
    DateInPast {
        /// The rejected due date.
        date: NaiveDate,
        /// The date the check ran against.
        today: NaiveDate,
    },
}

impl ValidationError {
    /// Returns the name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::FieldTooLong { field, .. }
            | Self::InvalidInteger { field } => *field,
            Self::TitleTooShort { .. } | Self::TitleTooLong { .. } => "title",
            Self::DescriptionTooShort { .. } => "description",
            Self::InvalidDate { .. } | Self::DateInPast { .. } => "due_date",
        }
    }

    /// Returns the stable machine-readable error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "MissingField",
            Self::FieldTooLong { .. } => "FieldTooLong",
            Self::InvalidInteger { .. } => "InvalidInteger",
            Self::TitleTooShort { .. } => "TitleTooShort",
            Self::TitleTooLong { .. } => "TitleTooLong",
            Self::DescriptionTooShort { .. } => "DescriptionTooShort",
            Self::InvalidDate { .. } => "InvalidDate",
            Self::DateInPast { .. } => "DateInPast",
        }
    }
}
