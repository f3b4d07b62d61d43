#![deny(missing_docs)]

//! # Attribute Extraction
//!
//! The single mechanism for pulling typed fields out of a loosely-typed mapping.
//!
//! A builder declares each field it wants as a source key plus a target type;
//! the target type's [`FromAttribute`] impl is the cast. Absent keys and explicit
//! `null` values are reported as `None` so that defaults are applied by the
//! caller when it constructs the typed value, never here. A value that is
//! present but cannot be cast is an [`AppError::InvalidValue`] naming the key.
//!
//! Vendor extensions (`x-*` keys) are pulled out separately by
//! [`extract_extensions`].

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A raw, untyped mapping taken from the source document.
pub type Fragment = Map<String, Value>;

/// Vendor extension values keyed by their normalized name.
pub type Extensions = IndexMap<String, Value>;

/// Prefix marking a vendor extension key.
pub const EXTENSION_PREFIX: &str = "x-";

/// Conversion from a raw document value into a typed field value.
pub trait FromAttribute: Sized {
    /// Description of the target type used in error messages.
    const EXPECTED: &'static str;

    /// Casts `value`, returning `None` when it does not fit the target type.
    ///
    /// `strict` is the factory-wide switch for open vocabularies; plain
    /// scalar casts ignore it.
    fn from_attribute(value: &Value, strict: bool) -> Option<Self>;
}

impl FromAttribute for Value {
    const EXPECTED: &'static str = "any value";

    fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromAttribute for String {
    const EXPECTED: &'static str = "string";

    fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromAttribute for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
        value.as_bool()
    }
}

impl FromAttribute for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl FromAttribute for u64 {
    const EXPECTED: &'static str = "non-negative integer";

    fn from_attribute(value: &Value, strict: bool) -> Option<Self> {
        i64::from_attribute(value, strict).and_then(|n| u64::try_from(n).ok())
    }
}

impl FromAttribute for f64 {
    const EXPECTED: &'static str = "number";

    fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl<T: FromAttribute> FromAttribute for Vec<T> {
    const EXPECTED: &'static str = "list";

    fn from_attribute(value: &Value, strict: bool) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| T::from_attribute(item, strict))
            .collect()
    }
}

impl<T: FromAttribute> FromAttribute for IndexMap<String, T> {
    const EXPECTED: &'static str = "mapping";

    fn from_attribute(value: &Value, strict: bool) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(key, item)| T::from_attribute(item, strict).map(|v| (key.clone(), v)))
            .collect()
    }
}

/// Typed view over one fragment.
///
/// `owner` names the kind of fragment for [`AppError::MissingField`] messages.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    data: &'a Fragment,
    owner: &'static str,
    strict: bool,
}

impl<'a> Attributes<'a> {
    /// Wraps a fragment in strict mode.
    pub fn new(data: &'a Fragment, owner: &'static str) -> Self {
        Self {
            data,
            owner,
            strict: true,
        }
    }

    /// Sets whether open vocabularies reject unknown values.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The underlying fragment.
    pub fn data(&self) -> &'a Fragment {
        self.data
    }

    /// Raw value under `key`; `None` when absent or explicitly null.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.data.get(key).filter(|value| !value.is_null())
    }

    /// Returns true when `key` carries a non-null value.
    pub fn has(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// Casts the value under `key`, if present.
    pub fn optional<T: FromAttribute>(&self, key: &str) -> AppResult<Option<T>> {
        self.raw(key)
            .map(|value| {
                T::from_attribute(value, self.strict)
                    .ok_or_else(|| AppError::invalid(key, value, T::EXPECTED))
            })
            .transpose()
    }

    /// Casts the value under `key`, failing when it is absent.
    pub fn required<T: FromAttribute>(&self, key: &str) -> AppResult<T> {
        self.optional(key)?
            .ok_or_else(|| AppError::missing(key, self.owner))
    }

    /// Reads a boolean flag, defaulting to `false` when absent.
    pub fn flag(&self, key: &str) -> AppResult<bool> {
        Ok(self.optional(key)?.unwrap_or(false))
    }

    /// Runs a custom cast (usually a nested builder) on the value under `key`.
    pub fn with<T>(
        &self,
        key: &str,
        cast: impl FnOnce(&'a Value) -> AppResult<T>,
    ) -> AppResult<Option<T>> {
        self.raw(key).map(cast).transpose()
    }

    /// Nested mapping under `key`, if present.
    pub fn mapping(&self, key: &str) -> AppResult<Option<&'a Fragment>> {
        self.raw(key)
            .map(|value| {
                value
                    .as_object()
                    .ok_or_else(|| AppError::invalid(key, value, "mapping"))
            })
            .transpose()
    }

    /// Nested sequence under `key`, if present.
    pub fn sequence(&self, key: &str) -> AppResult<Option<&'a [Value]>> {
        self.raw(key)
            .map(|value| {
                value
                    .as_array()
                    .map(Vec::as_slice)
                    .ok_or_else(|| AppError::invalid(key, value, "list"))
            })
            .transpose()
    }

    /// Vendor extensions of the fragment.
    pub fn extensions(&self) -> Extensions {
        extract_extensions(self.data)
    }
}

/// Views a raw value as a fragment, naming `context` on failure.
pub fn as_fragment<'a>(value: &'a Value, context: &str) -> AppResult<&'a Fragment> {
    value
        .as_object()
        .ok_or_else(|| AppError::invalid(context, value, "mapping"))
}

/// Collects every `x-` key of `data`.
///
/// The prefix is stripped and hyphens become underscores
/// (`x-custom-flag` -> `custom_flag`). Values are copied as-is, without
/// recursing into them.
pub fn extract_extensions(data: &Fragment) -> Extensions {
    data.iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(EXTENSION_PREFIX)
                .map(|name| (name.replace('-', "_"), value.clone()))
        })
        .collect()
}

/// Returns true for keys holding vendor extensions.
pub fn is_extension_key(key: &str) -> bool {
    key.starts_with(EXTENSION_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment(value: Value) -> Fragment {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_absent_and_null_are_omitted() {
        let data = fragment(json!({ "title": null }));
        let attrs = Attributes::new(&data, "schema");

        assert_eq!(attrs.optional::<String>("title").unwrap(), None);
        assert_eq!(attrs.optional::<String>("description").unwrap(), None);
        assert!(!attrs.flag("nullable").unwrap());
    }

    #[test]
    fn test_numeric_casts_accept_numeric_strings() {
        let data = fragment(json!({ "maxItems": "1", "minimum": 2.0, "multipleOf": "0.5" }));
        let attrs = Attributes::new(&data, "schema");

        assert_eq!(attrs.optional::<u64>("maxItems").unwrap(), Some(1));
        assert_eq!(attrs.optional::<i64>("minimum").unwrap(), Some(2));
        assert_eq!(attrs.optional::<f64>("multipleOf").unwrap(), Some(0.5));
    }

    #[test]
    fn test_cast_failure_names_field_and_value() {
        let data = fragment(json!({ "minimum": "abc" }));
        let attrs = Attributes::new(&data, "schema");

        let err = attrs.optional::<i64>("minimum").unwrap_err();
        match err {
            AppError::InvalidValue { field, value, .. } => {
                assert_eq!(field, "minimum");
                assert_eq!(value, json!("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_length_is_rejected() {
        let data = fragment(json!({ "maxLength": -1 }));
        let attrs = Attributes::new(&data, "schema");

        assert!(attrs.optional::<u64>("maxLength").is_err());
    }

    #[test]
    fn test_required_reports_owner() {
        let data = fragment(json!({}));
        let attrs = Attributes::new(&data, "server");

        let err = attrs.required::<String>("url").unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'url' in server");
    }

    #[test]
    fn test_string_list_cast() {
        let data = fragment(json!({ "required": ["a", "b"], "broken": ["a", 1] }));
        let attrs = Attributes::new(&data, "schema");

        assert_eq!(
            attrs.optional::<Vec<String>>("required").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert!(attrs.optional::<Vec<String>>("broken").is_err());
    }

    #[test]
    fn test_extension_attributes_extracting() {
        let data = fragment(json!({
            "type": "object",
            "title": "Object with extension attributes",
            "x-number-attribute": 123,
            "x-boolean-attribute": false,
            "x-object-attribute": { "key1": "value", "key2": "another value" },
        }));

        let extensions = extract_extensions(&data);

        assert_eq!(extensions.len(), 3);
        assert_eq!(extensions["number_attribute"], json!(123));
        assert_eq!(extensions["boolean_attribute"], json!(false));
        assert_eq!(
            extensions["object_attribute"],
            json!({ "key1": "value", "key2": "another value" })
        );
    }

    #[test]
    fn test_extensions_empty_without_marker() {
        let data = fragment(json!({ "type": "string", "example": "x-not-a-key" }));
        assert!(extract_extensions(&data).is_empty());
    }
}
