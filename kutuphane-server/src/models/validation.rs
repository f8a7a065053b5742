//! Validation error types and field helpers for write payloads

use std::fmt;

/// Validation error for write payloads and path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent from the payload
    Missing { field: &'static str },

    /// Required field present but blank
    Empty { field: &'static str },

    /// Identifier that is not an integer
    InvalidId { field: &'static str },

    /// Body or path parameter could not be parsed at all
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field: {}", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidId { field } => write!(f, "{} must be an integer", field),
            Self::Malformed { reason } => write!(f, "malformed request: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a text field to be present and non-blank.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Normalize an optional text field: blank strings become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Require an id field to be present.
pub fn required_id<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "ulke" };
        assert_eq!(err.to_string(), "missing required field: ulke");

        let err = ValidationError::Empty { field: "ad" };
        assert_eq!(err.to_string(), "ad cannot be empty");
    }

    #[test]
    fn required_text_rules() {
        assert_eq!(required_text("ad", Some("Ada".into())).unwrap(), "Ada");
        assert_eq!(
            required_text("ad", None).unwrap_err(),
            ValidationError::Missing { field: "ad" }
        );
        assert_eq!(
            required_text("ad", Some("  ".into())).unwrap_err(),
            ValidationError::Empty { field: "ad" }
        );
    }

    #[test]
    fn optional_text_drops_blank() {
        assert_eq!(optional_text(Some("".into())), None);
        assert_eq!(optional_text(Some(" \t".into())), None);
        assert_eq!(optional_text(None), None);
        assert_eq!(
            optional_text(Some("a@b.org".into())),
            Some("a@b.org".to_string())
        );
    }

    #[test]
    fn required_id_rules() {
        assert_eq!(required_id("kutuphane_id", Some(3)).unwrap(), 3);
        assert_eq!(
            required_id::<i64>("kutuphane_id", None).unwrap_err(),
            ValidationError::Missing { field: "kutuphane_id" }
        );
    }
}
