//! Validation rules applied before any task mutation.
//!
//! Every rule is a pure function returning `Ok` on success or the specific
//! [`ValidationError`] describing the first failure. The task service chains
//! them in a fixed order (required, length, uniqueness, date) and stops at the
//! first failure.

mod error;
pub mod rules;

pub use error::{ValidationError, ValidationResult};
pub use rules::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, DUE_DATE_FORMAT, LengthLimit, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS, parse_due_date, validate_description, validate_future_or_today_date,
    validate_integer, validate_length, validate_required, validate_title_length,
};
