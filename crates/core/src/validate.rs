//! Client-side validation of request payloads.
//!
//! Every create/edit form is bound to a schema; a payload that fails it is
//! never sent.

use crate::error::{DomainError, DomainResult};
use crate::time::parse_timestamp;

/// A request payload that can be checked before it is posted.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

pub fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn require_id(field: &str, value: i64) -> DomainResult<()> {
    if value <= 0 {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!("{field} must be >= 0")));
    }
    Ok(())
}

pub fn require_date(field: &str, value: &str) -> DomainResult<()> {
    if parse_timestamp(value).is_none() {
        return Err(DomainError::validation(format!("{field} is not a valid date")));
    }
    Ok(())
}

/// Optional dates must parse when present and non-empty.
pub fn optional_date(field: &str, value: Option<&str>) -> DomainResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => require_date(field, v),
        _ => Ok(()),
    }
}

/// `end` must not precede `start` (both already validated as dates).
pub fn ordered_dates(start_field: &str, start: &str, end_field: &str, end: &str) -> DomainResult<()> {
    if let (Some(s), Some(e)) = (parse_timestamp(start), parse_timestamp(end)) {
        if e < s {
            return Err(DomainError::validation(format!(
                "{end_field} must not be before {start_field}"
            )));
        }
    }
    Ok(())
}
