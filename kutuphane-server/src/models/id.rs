//! Identifier input accepted as a JSON number or a numeric string

use serde::Deserialize;

use super::ValidationError;

/// Row identifier as sent by clients.
///
/// Form-driven clients often send `"3"` instead of `3`; both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    /// Resolve to an integer id, naming `field` on failure.
    pub fn resolve(self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidId { field }),
        }
    }
}

/// Parse a path segment as an id.
pub fn parse_path_id(field: &'static str, raw: &str) -> Result<i64, ValidationError> {
    IdInput::Text(raw.to_owned()).resolve(field)
}
