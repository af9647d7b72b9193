//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all persisted records.
//! Every record has an opaque string ID and a capture-time timestamp,
//! both assigned once at creation and never changed afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;

    /// Returns when the entity was captured
    fn created_at(&self) -> DateTime<Utc>;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// A required form field was empty or blank
    MissingRequiredField(String),
    /// No record with the given ID in the list
    NotFound(String),
    /// A stored slot could not be decoded
    MalformedState(String),
    /// The backing key-value store refused a read or write
    Storage(String),
}

impl DomainError {
    pub fn missing(field: &str) -> Self {
        DomainError::MissingRequiredField(field.to_string())
    }

    pub fn not_found(id: &str) -> Self {
        DomainError::NotFound(id.to_string())
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::MissingRequiredField(field) => write!(f, "Missing required field: {}", field),
            DomainError::NotFound(id) => write!(f, "Not found: {}", id),
            DomainError::MalformedState(msg) => write!(f, "Malformed persisted state: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Trim a form value and reject it when nothing is left
pub fn require(field: &str, value: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::missing(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional form value, mapping blank input to `None`
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Form date text, or today's date when the field was left blank
pub fn date_or_today(value: &str, today: NaiveDate) -> String {
    optional(value).unwrap_or_else(|| today.format("%Y-%m-%d").to_string())
}

/// Lenient integer parse for quantity inputs.
///
/// Accepts an optional sign followed by digits and ignores whatever comes
/// after them, so `"12 un"` reads as 12. Anything without leading digits
/// reads as 0. The result is never negative.
pub fn parse_count(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);

    if negative {
        0
    } else {
        value
    }
}
