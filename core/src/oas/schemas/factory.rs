//! # Schema Factory
//!
//! Recursive builder turning raw fragments into typed [`Schema`] trees.
//!
//! The kind of a fragment is decided in priority order: `oneOf`, `anyOf`,
//! an explicit `type`, and finally the implicit case where the fragment carries
//! no type information at all and becomes an `anyOf` over every concrete kind.
//! `allOf` compositions are merged before any of that happens.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes, FromAttribute, Fragment};
use crate::oas::enums::{DataType, Vocabulary};
use crate::oas::schemas::merge::merge_all_of;
use crate::oas::schemas::{
    AnyOfSchema, ArraySchema, BooleanSchema, Discriminator, IntegerSchema, NullSchema,
    NumberSchema, ObjectSchema, OneOfSchema, Property, Schema, SchemaCommon, StringSchema,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

/// Deepest schema nesting accepted before giving up.
pub const MAX_DEPTH: usize = 128;

const OWNER: &str = "schema";

/// Builds [`Schema`] values from raw fragments.
///
/// The factory holds no state besides its strictness, so it is `Copy` and can
/// be shared freely between builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaFactory {
    strict: bool,
}

impl Default for SchemaFactory {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// How a fragment declares its kind.
enum Kind {
    Declared { data_type: DataType, nullable: bool },
    Implicit,
}

impl SchemaFactory {
    /// A strict factory: unknown formats are errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory with explicit strictness. `false` wraps unknown formats.
    pub fn with_strict(strict: bool) -> Self {
        Self { strict }
    }

    /// Whether unknown vocabulary values are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Builds the schema described by `data`.
    pub fn create(&self, data: &Value) -> AppResult<Schema> {
        self.create_at(data, 0)
    }

    fn create_at(&self, data: &Value, depth: usize) -> AppResult<Schema> {
        if depth > MAX_DEPTH {
            return Err(AppError::DepthExceeded { limit: MAX_DEPTH });
        }
        let merged = merge_all_of(as_fragment(data, OWNER)?)?;
        self.build(&merged, depth)
    }

    fn build(&self, data: &Fragment, depth: usize) -> AppResult<Schema> {
        let attrs = Attributes::new(data, OWNER).strict(self.strict);
        let kind = resolve_kind(&attrs)?;
        let mut common = common_attributes(&attrs)?;

        match kind {
            Kind::Declared {
                data_type,
                nullable,
            } => {
                trace!(kind = %data_type, depth, "building schema");
                common.nullable |= nullable;
                match data_type {
                    DataType::OneOf => self.one_of(&attrs, common, depth).map(Schema::OneOf),
                    DataType::AnyOf => self.any_of(&attrs, common, depth).map(Schema::AnyOf),
                    concrete => self.concrete(concrete, &attrs, common, depth, true),
                }
            }
            Kind::Implicit => {
                trace!(depth, "building implicit anyOf");
                let schemas = DataType::IMPLICIT
                    .iter()
                    .map(|&kind| self.concrete(kind, &attrs, common.clone(), depth, false))
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(Schema::AnyOf(AnyOfSchema { common, schemas }))
            }
        }
    }

    fn concrete(
        &self,
        data_type: DataType,
        attrs: &Attributes<'_>,
        common: SchemaCommon,
        depth: usize,
        items_required: bool,
    ) -> AppResult<Schema> {
        let schema = match data_type {
            DataType::Null => Schema::Null(NullSchema { common }),
            DataType::Boolean => Schema::Boolean(BooleanSchema { common }),
            DataType::Integer => {
                let (maximum, exclusive_maximum) =
                    bounds(attrs, "maximum", "exclusiveMaximum")?;
                let (minimum, exclusive_minimum) =
                    bounds(attrs, "minimum", "exclusiveMinimum")?;
                Schema::Integer(IntegerSchema {
                    common,
                    multiple_of: attrs.optional("multipleOf")?,
                    maximum,
                    exclusive_maximum,
                    minimum,
                    exclusive_minimum,
                    format: attrs.optional("format")?,
                })
            }
            DataType::Number => {
                let (maximum, exclusive_maximum) =
                    bounds(attrs, "maximum", "exclusiveMaximum")?;
                let (minimum, exclusive_minimum) =
                    bounds(attrs, "minimum", "exclusiveMinimum")?;
                Schema::Number(NumberSchema {
                    common,
                    multiple_of: attrs.optional("multipleOf")?,
                    maximum,
                    exclusive_maximum,
                    minimum,
                    exclusive_minimum,
                    format: attrs.optional("format")?,
                })
            }
            DataType::String => Schema::String(StringSchema {
                common,
                max_length: attrs.optional("maxLength")?,
                min_length: attrs.optional("minLength")?,
                pattern: attrs.optional("pattern")?,
                format: attrs.optional("format")?,
            }),
            DataType::Array => {
                let items = attrs.with("items", |items| self.create_at(items, depth + 1))?;
                if items_required && items.is_none() {
                    return Err(AppError::missing("items", "array schema"));
                }
                Schema::Array(ArraySchema {
                    common,
                    max_items: attrs.optional("maxItems")?,
                    min_items: attrs.optional("minItems")?,
                    unique_items: attrs.flag("uniqueItems")?,
                    items: items.map(Box::new),
                })
            }
            DataType::Object => {
                let properties = match attrs.mapping("properties")? {
                    Some(properties) => properties
                        .iter()
                        .map(|(name, schema)| {
                            Ok(Property {
                                name: name.clone(),
                                schema: self.create_at(schema, depth + 1)?,
                            })
                        })
                        .collect::<AppResult<Vec<_>>>()?,
                    None => Vec::new(),
                };
                Schema::Object(ObjectSchema {
                    common,
                    max_properties: attrs.optional("maxProperties")?,
                    min_properties: attrs.optional("minProperties")?,
                    required: attrs.optional("required")?.unwrap_or_default(),
                    properties,
                })
            }
            DataType::OneOf | DataType::AnyOf => {
                return Err(AppError::UnsupportedType(data_type.to_string()));
            }
        };
        Ok(schema)
    }

    fn one_of(
        &self,
        attrs: &Attributes<'_>,
        common: SchemaCommon,
        depth: usize,
    ) -> AppResult<OneOfSchema> {
        let schemas = self.branches(attrs, "oneOf", depth)?;
        let discriminator = attrs
            .mapping("discriminator")?
            .map(|data| self.discriminator(data, depth))
            .transpose()?;
        Ok(OneOfSchema {
            common,
            schemas,
            discriminator,
        })
    }

    fn any_of(
        &self,
        attrs: &Attributes<'_>,
        common: SchemaCommon,
        depth: usize,
    ) -> AppResult<AnyOfSchema> {
        Ok(AnyOfSchema {
            common,
            schemas: self.branches(attrs, "anyOf", depth)?,
        })
    }

    fn branches(&self, attrs: &Attributes<'_>, key: &str, depth: usize) -> AppResult<Vec<Schema>> {
        attrs
            .sequence(key)?
            .ok_or_else(|| AppError::missing(key, format!("{key} schema")))?
            .iter()
            .map(|branch| self.create_at(branch, depth + 1))
            .collect()
    }

    fn discriminator(&self, data: &Fragment, depth: usize) -> AppResult<Discriminator> {
        let attrs = Attributes::new(data, "discriminator").strict(self.strict);
        let mapping = match attrs.mapping("mapping")? {
            Some(mapping) => mapping
                .iter()
                .map(|(value, schema)| {
                    as_fragment(schema, "mapping")?;
                    Ok((value.clone(), self.create_at(schema, depth + 1)?))
                })
                .collect::<AppResult<IndexMap<_, _>>>()?,
            None => IndexMap::new(),
        };
        Ok(Discriminator {
            property_name: attrs.required("propertyName")?,
            mapping,
        })
    }
}

fn resolve_kind(attrs: &Attributes<'_>) -> AppResult<Kind> {
    let declared = |data_type| Kind::Declared {
        data_type,
        nullable: false,
    };
    if attrs.has("oneOf") {
        return Ok(declared(DataType::OneOf));
    }
    if attrs.has("anyOf") {
        return Ok(declared(DataType::AnyOf));
    }
    match attrs.raw("type") {
        None => Ok(Kind::Implicit),
        Some(Value::String(name)) => lookup_type(name).map(declared),
        Some(Value::Array(names)) => type_list(names),
        Some(other) => Err(AppError::InvalidType(other.to_string())),
    }
}

fn lookup_type(name: &str) -> AppResult<DataType> {
    DataType::lookup(name).ok_or_else(|| AppError::InvalidType(name.to_string()))
}

/// OAS 3.1 `type: [..]` form; `null` alongside a single kind means nullable.
/// An empty list names no kind at all.
fn type_list(names: &[Value]) -> AppResult<Kind> {
    let mut nullable = false;
    let mut kinds = Vec::new();
    for name in names {
        let name = name
            .as_str()
            .ok_or_else(|| AppError::InvalidType(name.to_string()))?;
        match lookup_type(name)? {
            DataType::Null => nullable = true,
            kind => kinds.push(kind),
        }
    }
    match kinds.as_slice() {
        [] if nullable => Ok(Kind::Declared {
            data_type: DataType::Null,
            nullable: false,
        }),
        [] => Err(AppError::InvalidType("[]".to_string())),
        [data_type] => Ok(Kind::Declared {
            data_type: *data_type,
            nullable,
        }),
        _ => Err(AppError::UnsupportedType(
            names
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        )),
    }
}

fn common_attributes(attrs: &Attributes<'_>) -> AppResult<SchemaCommon> {
    Ok(SchemaCommon {
        title: attrs.optional("title")?,
        enum_values: attrs.optional("enum")?.unwrap_or_default(),
        example: attrs.optional("example")?,
        description: attrs.optional("description")?,
        default: attrs.optional("default")?,
        nullable: attrs.flag("nullable")?,
        read_only: attrs.flag("readOnly")?,
        write_only: attrs.flag("writeOnly")?,
        deprecated: attrs.flag("deprecated")?,
        extensions: attrs.extensions(),
    })
}

/// Reads an inclusive bound and its exclusive counterpart.
///
/// The boolean exclusive form of OAS 3.0 is folded into the numeric one:
/// `true` moves the inclusive bound over, `false` is ignored.
fn bounds<T: FromAttribute>(
    attrs: &Attributes<'_>,
    inclusive: &str,
    exclusive: &str,
) -> AppResult<(Option<T>, Option<T>)> {
    let bound = attrs.optional::<T>(inclusive)?;
    match attrs.raw(exclusive) {
        Some(Value::Bool(true)) => Ok((None, bound)),
        Some(Value::Bool(false)) => Ok((bound, None)),
        _ => Ok((bound, attrs.optional(exclusive)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::enums::{IntegerFormat, Loose, StringFormat};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create(data: Value) -> AppResult<Schema> {
        SchemaFactory::new().create(&data)
    }

    #[test]
    fn test_base_attributes_round_trip() {
        let schema = create(json!({
            "type": "string",
            "title": "Name",
            "description": "Display name",
            "default": "anonymous",
            "nullable": true,
        }))
        .unwrap();

        let common = schema.common();
        assert_eq!(common.title.as_deref(), Some("Name"));
        assert_eq!(common.description.as_deref(), Some("Display name"));
        assert_eq!(common.default, Some(json!("anonymous")));
        assert!(common.nullable);
        assert!(!common.read_only);
        assert!(!common.write_only);
        assert!(!common.deprecated);
        assert!(common.enum_values.is_empty());
        assert!(common.extensions.is_empty());
    }

    #[test]
    fn test_integer_attributes() {
        let schema = create(json!({
            "type": "integer",
            "format": "int64",
            "minimum": 0,
            "maximum": "100",
            "multipleOf": 5,
            "enum": [0, 50, 100],
        }))
        .unwrap();

        assert_eq!(
            schema,
            Schema::Integer(IntegerSchema {
                common: SchemaCommon {
                    enum_values: vec![json!(0), json!(50), json!(100)],
                    ..Default::default()
                },
                multiple_of: Some(5),
                maximum: Some(100),
                minimum: Some(0),
                format: Some(Loose::Known(IntegerFormat::Int64)),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_cast_failure_propagates_from_nested_schema() {
        let err = create(json!({
            "type": "object",
            "properties": { "age": { "type": "integer", "minimum": "abc" } },
        }))
        .unwrap_err();

        assert!(
            matches!(err, AppError::InvalidValue { ref field, .. } if field == "minimum"),
            "{err}"
        );
    }

    #[test]
    fn test_array_requires_items() {
        let err = create(json!({ "type": "array" })).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'items' in array schema");

        let Schema::Array(array) = create(json!({ "type": "array", "items": { "type": "string" } })).unwrap() else {
            panic!("expected an array schema");
        };
        assert_eq!(
            array.items.as_deref().map(Schema::data_type),
            Some(DataType::String)
        );
    }

    #[test]
    fn test_object_property_order_preserved() {
        let Schema::Object(object) = create(json!({
            "type": "object",
            "required": ["z"],
            "properties": { "z": { "type": "string" }, "a": { "type": "integer" } },
        }))
        .unwrap() else {
            panic!("expected an object schema");
        };

        let names: Vec<_> = object.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["z", "a"]);
        assert_eq!(object.required, ["z"]);
    }

    #[test]
    fn test_object_defaults_to_empty_lists() {
        let Schema::Object(object) = create(json!({ "type": "object" })).unwrap() else {
            panic!("expected an object schema");
        };
        assert!(object.properties.is_empty());
        assert!(object.required.is_empty());
    }

    #[test]
    fn test_implicit_any_of_fan_out() {
        let Schema::AnyOf(any_of) = create(json!({ "description": "anything" })).unwrap() else {
            panic!("expected an anyOf schema");
        };

        let kinds: Vec<_> = any_of.schemas.iter().map(Schema::data_type).collect();
        assert_eq!(kinds, DataType::IMPLICIT);
        for branch in &any_of.schemas {
            assert_eq!(branch.common().description.as_deref(), Some("anything"));
        }
    }

    #[test]
    fn test_explicit_any_of() {
        let Schema::AnyOf(any_of) = create(json!({
            "anyOf": [{ "type": "string" }, { "type": "integer" }],
        }))
        .unwrap() else {
            panic!("expected an anyOf schema");
        };
        assert_eq!(any_of.schemas.len(), 2);
    }

    #[test]
    fn test_one_of_takes_priority_over_type() {
        let schema = create(json!({
            "type": "object",
            "oneOf": [{ "type": "string" }],
            "anyOf": [{ "type": "integer" }],
        }))
        .unwrap();
        assert_eq!(schema.data_type(), DataType::OneOf);
    }

    #[test]
    fn test_discriminator_mapping_is_built() {
        let Schema::OneOf(one_of) = create(json!({
            "oneOf": [{ "type": "string" }, { "type": "integer" }],
            "discriminator": {
                "propertyName": "t",
                "mapping": { "x": { "type": "string", "maxLength": 3 } },
            },
        }))
        .unwrap() else {
            panic!("expected a oneOf schema");
        };

        let discriminator = one_of.discriminator.unwrap();
        assert_eq!(discriminator.property_name, "t");
        assert_eq!(
            discriminator.mapping["x"],
            Schema::String(StringSchema {
                max_length: Some(3),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_discriminator_requires_property_name() {
        let err = create(json!({
            "oneOf": [{ "type": "string" }],
            "discriminator": { "mapping": {} },
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field 'propertyName' in discriminator"
        );
    }

    #[test]
    fn test_declared_one_of_requires_branches() {
        let err = create(json!({ "type": "oneOf" })).unwrap_err();
        assert!(matches!(err, AppError::MissingField { ref field, .. } if field == "oneOf"));
    }

    #[test]
    fn test_strict_and_loose_formats() {
        let data = json!({ "type": "string", "format": "unknown-format" });

        assert!(SchemaFactory::new().create(&data).is_err());

        let Schema::String(string) = SchemaFactory::with_strict(false).create(&data).unwrap() else {
            panic!("expected a string schema");
        };
        assert_eq!(string.format, Some(Loose::Unknown("unknown-format".into())));

        let Schema::String(known) = SchemaFactory::with_strict(false)
            .create(&json!({ "type": "string", "format": "date-time" }))
            .unwrap()
        else {
            panic!("expected a string schema");
        };
        assert_eq!(known.format, Some(Loose::Known(StringFormat::DateTime)));
    }

    #[test]
    fn test_extensions_on_every_node() {
        let schema = create(json!({
            "type": "object",
            "x-custom-flag": true,
            "properties": { "id": { "type": "string", "x-internal-id": 7 } },
        }))
        .unwrap();

        assert_eq!(schema.extensions()["custom_flag"], json!(true));
        let Schema::Object(object) = schema else {
            panic!("expected an object schema");
        };
        assert_eq!(
            object.property("id").unwrap().extensions()["internal_id"],
            json!(7)
        );
    }

    #[test]
    fn test_invalid_type_names_value() {
        let err = create(json!({ "type": "float" })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema type 'float'");
    }

    #[test]
    fn test_all_of_is_merged_before_typing() {
        let Schema::Object(object) = create(json!({
            "allOf": [
                { "type": "object", "properties": { "id": { "type": "integer" } } },
                { "properties": { "name": { "type": "string" } }, "required": ["name"] },
            ],
        }))
        .unwrap() else {
            panic!("expected an object schema");
        };
        assert_eq!(object.properties.len(), 2);
        assert_eq!(object.required, ["name"]);
    }

    #[test]
    fn test_type_list_with_null() {
        let schema = create(json!({ "type": ["string", "null"] })).unwrap();
        assert_eq!(schema.data_type(), DataType::String);
        assert!(schema.common().nullable);

        let schema = create(json!({ "type": ["null"] })).unwrap();
        assert_eq!(schema.data_type(), DataType::Null);

        let err = create(json!({ "type": ["string", "integer"] })).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedType(_)));

        let err = create(json!({ "type": [] })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema type '[]'");
    }

    #[test]
    fn test_boolean_exclusive_bounds() {
        let Schema::Number(number) = create(json!({
            "type": "number",
            "maximum": 10.5,
            "exclusiveMaximum": true,
            "minimum": 1,
            "exclusiveMinimum": false,
        }))
        .unwrap() else {
            panic!("expected a number schema");
        };
        assert_eq!(number.maximum, None);
        assert_eq!(number.exclusive_maximum, Some(10.5));
        assert_eq!(number.minimum, Some(1.0));
        assert_eq!(number.exclusive_minimum, None);
    }

    #[test]
    fn test_depth_guard() {
        let mut data = json!({ "type": "string" });
        for _ in 0..=MAX_DEPTH {
            data = json!({ "type": "array", "items": data });
        }
        let err = create(data).unwrap_err();
        assert!(matches!(err, AppError::DepthExceeded { limit: MAX_DEPTH }));
    }
}
