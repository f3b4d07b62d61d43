//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! Every builder returns `AppResult` and propagates with `?`, so a failure deep
//! inside a nested schema surfaces as the single terminal error of the parse.

use derive_more::{Display, From};
use serde_json::Value;

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The document could not be loaded, parsed or dereferenced.
    #[from(ignore)]
    #[display("Document Error: {_0}")]
    Document(String),

    /// A `type` value outside the closed schema vocabulary.
    #[from(ignore)]
    #[display("Invalid schema type '{_0}'")]
    InvalidType(String),

    /// A recognized `type` declaration that cannot be turned into a single schema kind.
    #[from(ignore)]
    #[display("Unsupported schema type: '{_0}'")]
    UnsupportedType(String),

    /// A structurally required field is absent.
    #[from(ignore)]
    #[display("Missing required field '{field}' in {context}")]
    MissingField {
        /// Source key that was expected.
        field: String,
        /// The kind of fragment being built (e.g. "array schema").
        context: String,
    },

    /// A field value could not be cast to its target type.
    #[from(ignore)]
    #[display("Invalid '{field}' property value {value}: expected {expected}")]
    InvalidValue {
        /// Source key of the offending field.
        field: String,
        /// The raw value that failed to cast.
        value: Value,
        /// Human readable description of the target type.
        expected: &'static str,
    },

    /// Schema nesting went deeper than the factory allows.
    #[from(ignore)]
    #[display("Schema nesting exceeds the limit of {limit} levels")]
    DepthExceeded {
        /// Configured depth limit.
        limit: usize,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Shorthand for a [`AppError::MissingField`].
    pub fn missing(field: impl Into<String>, context: impl Into<String>) -> Self {
        AppError::MissingField {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Shorthand for a [`AppError::InvalidValue`].
    pub fn invalid(field: impl Into<String>, value: &Value, expected: &'static str) -> Self {
        AppError::InvalidValue {
            field: field.into(),
            value: value.clone(),
            expected,
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, never to Document
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_invalid_value_names_field_and_value() {
        let err = AppError::invalid("minimum", &json!("abc"), "integer");
        assert_eq!(
            err.to_string(),
            "Invalid 'minimum' property value \"abc\": expected integer"
        );
    }

    #[test]
    fn test_invalid_type_message() {
        let err = AppError::InvalidType("float".into());
        assert_eq!(err.to_string(), "Invalid schema type 'float'");
    }
}
