//! Builds operation and path-level parameters.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::{build_each, ContentBuilder};
use crate::oas::enums::{ParameterLocation, ParameterStyle};
use crate::oas::models::Parameter;
use crate::oas::schemas::SchemaFactory;
use serde_json::Value;

/// Builder for [`Parameter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterBuilder {
    factory: SchemaFactory,
    content: ContentBuilder,
}

impl ParameterBuilder {
    /// Creates a parameter builder.
    pub fn new(factory: SchemaFactory, content: ContentBuilder) -> Self {
        Self { factory, content }
    }

    /// Builds one parameter.
    ///
    /// Either `schema` or `content` must be given. `style` must be one the
    /// location allows and defaults per location; `explode` defaults to true
    /// only for `form`.
    pub fn build(&self, data: &Value) -> AppResult<Parameter> {
        let attrs = Attributes::new(as_fragment(data, "parameters")?, "parameter");
        let location: ParameterLocation = attrs.required("in")?;

        let schema = attrs.with("schema", |schema| self.factory.create(schema))?;
        let content = attrs
            .with("content", |content| self.content.build_list(content))?
            .unwrap_or_default();
        if schema.is_none() && content.is_empty() {
            return Err(AppError::missing("schema", "parameter"));
        }

        let style = match attrs.optional::<ParameterStyle>("style")? {
            Some(style) if !location.allowed_styles().contains(&style) => {
                return Err(AppError::invalid(
                    "style",
                    &Value::String(style.to_string()),
                    "a style allowed for the parameter location",
                ));
            }
            Some(style) => style,
            None => location.default_style(),
        };

        Ok(Parameter {
            name: attrs.required("name")?,
            location,
            required: attrs.flag("required")?,
            schema,
            content,
            description: attrs.optional("description")?,
            deprecated: attrs.flag("deprecated")?,
            style,
            explode: attrs
                .optional("explode")?
                .unwrap_or(style == ParameterStyle::Form),
            allow_reserved: attrs.flag("allowReserved")?,
            extensions: attrs.extensions(),
        })
    }

    /// Builds a list of parameters, keeping order.
    pub fn build_list(&self, data: &Value) -> AppResult<Vec<Parameter>> {
        build_each(data, "parameters", |parameter| self.build(parameter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::schemas::Schema;
    use serde_json::json;

    fn build(data: Value) -> AppResult<Parameter> {
        ParameterBuilder::default().build(&data)
    }

    #[test]
    fn test_path_parameter() {
        let parameter = build(json!({
            "name": "petId",
            "in": "path",
            "description": "ID of pet to return",
            "required": true,
            "schema": { "type": "integer", "format": "int64" },
        }))
        .unwrap();

        assert_eq!(parameter.name, "petId");
        assert_eq!(parameter.location, ParameterLocation::Path);
        assert!(parameter.required);
        assert!(!parameter.deprecated);
        assert!(matches!(parameter.schema, Some(Schema::Integer(_))));
        assert_eq!(parameter.style, ParameterStyle::Simple);
        assert!(!parameter.explode);
    }

    #[test]
    fn test_query_defaults_to_exploded_form() {
        let parameter = build(json!({
            "name": "tags",
            "in": "query",
            "schema": { "type": "array", "items": { "type": "string" } },
        }))
        .unwrap();

        assert!(!parameter.required);
        assert_eq!(parameter.style, ParameterStyle::Form);
        assert!(parameter.explode);
    }

    #[test]
    fn test_style_must_fit_location() {
        let err = build(json!({
            "name": "X-Trace",
            "in": "header",
            "style": "form",
            "schema": { "type": "string" },
        }))
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidValue { ref field, .. } if field == "style"));
    }

    #[test]
    fn test_content_instead_of_schema() {
        let parameter = build(json!({
            "name": "filter",
            "in": "query",
            "content": { "application/json": { "schema": { "type": "object" } } },
        }))
        .unwrap();
        assert!(parameter.schema.is_none());
        assert_eq!(parameter.content.len(), 1);
    }

    #[test]
    fn test_schema_or_content_required() {
        let err = build(json!({ "name": "q", "in": "query" })).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'schema' in parameter");
    }

    #[test]
    fn test_unknown_location() {
        let err = build(json!({ "name": "q", "in": "body", "schema": {} })).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue { ref field, .. } if field == "in"));
    }
}
