//! Individual validation rule implementations.
//!
//! Lengths are counted in characters after trimming surrounding whitespace,
//! so multi-byte titles are measured the way users type them.

use super::{ValidationError, ValidationResult};
use chrono::NaiveDate;

/// Minimum title length in trimmed characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum title length in trimmed characters.
pub const TITLE_MAX_CHARS: usize = 100;
/// Minimum length of a non-empty description in trimmed characters.
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// Maximum description length in trimmed characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Accepted due date format.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Byte length of a due date in [`DUE_DATE_FORMAT`].
const DUE_DATE_LEN: usize = 10;

/// A field value paired with its maximum trimmed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthLimit<'a> {
    field: &'static str,
    value: &'a str,
    max_chars: usize,
}

impl<'a> LengthLimit<'a> {
    /// Creates a length limit for `field`.
    #[must_use]
    pub const fn new(field: &'static str, value: &'a str, max_chars: usize) -> Self {
        Self {
            field,
            value,
            max_chars,
        }
    }
}

fn trimmed_chars(value: &str) -> usize {
    value.trim().chars().count()
}

/// Validates that every field holds a non-blank value.
///
/// Fields are checked in the given order and the first blank one is
/// reported.
///
/// # Errors
///
/// Returns `ValidationError::MissingField` naming the first empty or
/// whitespace-only field.
pub fn validate_required(fields: &[(&'static str, &str)]) -> ValidationResult<()> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |&(field, _)| {
            Err(ValidationError::MissingField { field })
        })
}

/// Validates that no field exceeds its maximum trimmed length.
///
/// # Errors
///
/// Returns `ValidationError::FieldTooLong` for the first oversized field.
pub fn validate_length(limits: &[LengthLimit<'_>]) -> ValidationResult<()> {
    limits
        .iter()
        .find(|limit| trimmed_chars(limit.value) > limit.max_chars)
        .map_or(Ok(()), |limit| {
            Err(ValidationError::FieldTooLong {
                field: limit.field,
                max: limit.max_chars,
            })
        })
}

/// Validates that `value` is a positive integer and returns it.
///
/// # Errors
///
/// Returns `ValidationError::InvalidInteger` when the value does not parse
/// as an integer or is not greater than zero.
pub fn validate_integer(value: &str, field: &'static str) -> ValidationResult<i64> {
    match value.trim().parse::<i64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ValidationError::InvalidInteger { field }),
    }
}

/// Validates that the trimmed title length lies within the allowed range.
///
/// # Errors
///
/// Returns `ValidationError::TitleTooShort` or
/// `ValidationError::TitleTooLong` when the title is out of range.
///
/// # Examples
///
/// ```rust
/// use gestor_tareas::task::validation::{ValidationError, validate_title_length};
///
/// assert!(validate_title_length("  Buy groceries  ").is_ok());
/// assert_eq!(
///     validate_title_length("Buy"),
///     Err(ValidationError::TitleTooShort { min: 5 })
/// );
/// ```
pub fn validate_title_length(title: &str) -> ValidationResult<()> {
    let length = trimmed_chars(title);
    if length < TITLE_MIN_CHARS {
        return Err(ValidationError::TitleTooShort {
            min: TITLE_MIN_CHARS,
        });
    }
    if length > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong {
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

/// Validates an optional description.
///
/// Blank descriptions are accepted and stored as absent.
///
/// # Errors
///
/// Returns `ValidationError::DescriptionTooShort` when the description is
/// non-blank but shorter than the minimum.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let length = trimmed_chars(description);
    if length > 0 && length < DESCRIPTION_MIN_CHARS {
        return Err(ValidationError::DescriptionTooShort {
            min: DESCRIPTION_MIN_CHARS,
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` due date.
///
/// # Errors
///
/// Returns `ValidationError::InvalidDate` when the value is not a calendar
/// date in the expected format.
pub fn parse_due_date(value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidDate {
        value: value.to_owned(),
    };
    let trimmed = value.trim();
    // chrono accepts unpadded months and days; the wire format does not.
    if trimmed.len() != DUE_DATE_LEN {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT).map_err(|_| invalid())
}

/// Validates that `date` is today or later.
///
/// # Errors
///
/// Returns `ValidationError::DateInPast` when `date` is strictly before
/// `today`.
pub fn validate_future_or_today_date(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::DateInPast { date, today });
    }
    Ok(())
}
