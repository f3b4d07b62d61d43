#![deny(missing_docs)]

//! # Schema Model
//!
//! Typed representation of JSON-Schema-style type definitions.
//!
//! A [`Schema`] is a closed sum over the concrete kinds. Every kind embeds the
//! same [`SchemaCommon`] block and owns its nested schemas outright, so a tree
//! is freed with its owner and never shares nodes.
//!
//! - **merge**: `allOf` flattening performed before typing.
//! - **factory**: the recursive builder turning fragments into schemas.

pub mod factory;
pub mod merge;

pub use factory::SchemaFactory;
pub use merge::merge_all_of;

use crate::oas::attributes::Extensions;
use crate::oas::enums::{DataType, IntegerFormat, Loose, NumberFormat, StringFormat};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Attributes shared by every schema kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaCommon {
    /// Short title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Allowed literal values, in declaration order.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    /// Example value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Whether `null` is accepted in addition to the kind.
    #[serde(skip_serializing_if = "is_false")]
    pub nullable: bool,
    /// Only sent in responses.
    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,
    /// Only sent in requests.
    #[serde(skip_serializing_if = "is_false")]
    pub write_only: bool,
    /// Marked for removal.
    #[serde(skip_serializing_if = "is_false")]
    pub deprecated: bool,
    /// Vendor extensions with normalized keys.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// The `null` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NullSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
}

/// The `boolean` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BooleanSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
}

/// The `integer` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Value must be a multiple of this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<i64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    /// Exclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<i64>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    /// Exclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<i64>,
    /// Storage width hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Loose<IntegerFormat>>,
}

/// The `number` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Value must be a multiple of this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Exclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Exclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    /// Precision hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Loose<NumberFormat>>,
}

/// The `string` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Maximum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    /// Minimum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    /// Regular expression, kept uncompiled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Semantic format hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Loose<StringFormat>>,
}

/// The `array` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Maximum item count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    /// Minimum item count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    /// Items must be pairwise distinct.
    #[serde(skip_serializing_if = "is_false")]
    pub unique_items: bool,
    /// Item schema.
    ///
    /// Always set for a declared `array`; only the branches synthesized for a
    /// fragment without any type information may leave it empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

/// One named member of an object schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    /// Property key.
    pub name: String,
    /// Property schema.
    pub schema: Schema,
}

/// The `object` kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Maximum property count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_properties: Option<u64>,
    /// Minimum property count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_properties: Option<u64>,
    /// Names of mandatory properties.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Declared properties in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

impl ObjectSchema {
    /// Looks up a declared property by name.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .map(|property| &property.schema)
    }
}

/// Branch selector of a `oneOf` union.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discriminator {
    /// Property whose value selects the branch.
    pub property_name: String,
    /// Explicit value to schema assignments.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, Schema>,
}

/// The exclusive union kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OneOfSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Branches in source order.
    pub schemas: Vec<Schema>,
    /// Optional branch selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
}

/// The non-exclusive union kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AnyOfSchema {
    /// Shared attributes.
    #[serde(flatten)]
    pub common: SchemaCommon,
    /// Branches in source order, or one per concrete kind when synthesized.
    pub schemas: Vec<Schema>,
}

/// A typed schema node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Schema {
    /// `null`
    #[serde(rename = "null")]
    Null(NullSchema),
    /// `boolean`
    #[serde(rename = "boolean")]
    Boolean(BooleanSchema),
    /// `integer`
    #[serde(rename = "integer")]
    Integer(IntegerSchema),
    /// `number`
    #[serde(rename = "number")]
    Number(NumberSchema),
    /// `string`
    #[serde(rename = "string")]
    String(StringSchema),
    /// `array`
    #[serde(rename = "array")]
    Array(ArraySchema),
    /// `object`
    #[serde(rename = "object")]
    Object(ObjectSchema),
    /// `oneOf`
    #[serde(rename = "oneOf")]
    OneOf(OneOfSchema),
    /// `anyOf`
    #[serde(rename = "anyOf")]
    AnyOf(AnyOfSchema),
}

impl Schema {
    /// The `type` tag of this node.
    pub fn data_type(&self) -> DataType {
        match self {
            Schema::Null(_) => DataType::Null,
            Schema::Boolean(_) => DataType::Boolean,
            Schema::Integer(_) => DataType::Integer,
            Schema::Number(_) => DataType::Number,
            Schema::String(_) => DataType::String,
            Schema::Array(_) => DataType::Array,
            Schema::Object(_) => DataType::Object,
            Schema::OneOf(_) => DataType::OneOf,
            Schema::AnyOf(_) => DataType::AnyOf,
        }
    }

    /// Attributes shared by every kind.
    pub fn common(&self) -> &SchemaCommon {
        match self {
            Schema::Null(s) => &s.common,
            Schema::Boolean(s) => &s.common,
            Schema::Integer(s) => &s.common,
            Schema::Number(s) => &s.common,
            Schema::String(s) => &s.common,
            Schema::Array(s) => &s.common,
            Schema::Object(s) => &s.common,
            Schema::OneOf(s) => &s.common,
            Schema::AnyOf(s) => &s.common,
        }
    }

    /// Vendor extensions of this node.
    pub fn extensions(&self) -> &Extensions {
        &self.common().extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_type_tag() {
        let schema = Schema::Array(ArraySchema {
            items: Some(Box::new(Schema::String(StringSchema {
                format: Some(StringFormat::Uuid.into()),
                ..Default::default()
            }))),
            ..Default::default()
        });

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": "array", "items": { "type": "string", "format": "uuid" } })
        );
    }

    #[test]
    fn test_property_lookup() {
        let object = ObjectSchema {
            properties: vec![Property {
                name: "id".into(),
                schema: Schema::Integer(IntegerSchema::default()),
            }],
            ..Default::default()
        };
        assert_eq!(
            object.property("id").map(Schema::data_type),
            Some(DataType::Integer)
        );
        assert!(object.property("name").is_none());
    }
}
