#![deny(missing_docs)]

//! # Document Parsing
//!
//! Wires every section builder into a [`Parser`] and exposes the whole-document
//! entry points.
//!
//! ```no_run
//! let spec = oas_typed_core::parse("openapi.yaml")?;
//! println!("{} paths", spec.paths.len());
//! # Ok::<(), oas_typed_core::AppError>(())
//! ```

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::{
    ContentBuilder, ExternalDocBuilder, HeaderBuilder, InfoBuilder, OAuthFlowBuilder,
    OperationBuilder, ParameterBuilder, PathBuilder, RequestBuilder, ResponseBuilder,
    SchemasBuilder, SecurityBuilder, ServerBuilder, TagBuilder,
};
use crate::oas::models::Specification;
use crate::oas::resolver::{DocumentResolver, DocumentSource, LocalResolver};
use crate::oas::schemas::SchemaFactory;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::info;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Reject unknown formats and media types instead of wrapping them.
    pub strict: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Turns a dereferenced document into a [`Specification`].
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    info: InfoBuilder,
    server: ServerBuilder,
    tag: TagBuilder,
    external_doc: ExternalDocBuilder,
    path: PathBuilder,
    security: SecurityBuilder,
    schemas: SchemasBuilder,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

impl Parser {
    /// Builds the full builder graph for `options`.
    pub fn new(options: ParserOptions) -> Self {
        let factory = SchemaFactory::with_strict(options.strict);
        let external_doc = ExternalDocBuilder;
        let content = ContentBuilder::new(factory);
        let parameter = ParameterBuilder::new(factory, content);
        let response = ResponseBuilder::new(content, HeaderBuilder::new(factory));
        let operation = OperationBuilder::new(
            response,
            external_doc,
            RequestBuilder::new(content),
            parameter,
        );

        Self {
            info: InfoBuilder,
            server: ServerBuilder,
            tag: TagBuilder::new(external_doc),
            external_doc,
            path: PathBuilder::new(operation, parameter),
            security: SecurityBuilder::new(OAuthFlowBuilder),
            schemas: SchemasBuilder::new(factory),
        }
    }

    /// Builds the specification from a dereferenced root mapping.
    pub fn load_specification(&self, data: &Value) -> AppResult<Specification> {
        let attrs = Attributes::new(as_fragment(data, "document")?, "document");
        let version: String = attrs
            .optional("openapi")
            .ok()
            .flatten()
            .ok_or_else(|| AppError::Document("Invalid OpenAPI schema version".into()))?;

        let components = attrs
            .mapping("components")?
            .map(|components| Attributes::new(components, "components"));
        let security_schemas = match components {
            Some(components) => components
                .with("securitySchemes", |schemes| {
                    self.security.build_collection(schemes)
                })?
                .unwrap_or_default(),
            None => IndexMap::new(),
        };
        let schemas = match components {
            Some(components) => components
                .with("schemas", |schemas| self.schemas.build_collection(schemas))?
                .unwrap_or_default(),
            None => IndexMap::new(),
        };

        let specification = Specification {
            version,
            info: attrs
                .with("info", |info| self.info.build(info))?
                .ok_or_else(|| AppError::missing("info", "document"))?,
            servers: attrs
                .with("servers", |servers| self.server.build_list(servers))?
                .unwrap_or_default(),
            tags: attrs
                .with("tags", |tags| self.tag.build_list(tags))?
                .unwrap_or_default(),
            security_schemas,
            security: attrs.optional("security")?.unwrap_or_default(),
            external_docs: attrs.with("externalDocs", |doc| self.external_doc.build(doc))?,
            paths: attrs
                .with("paths", |paths| self.path.build_collection(paths))?
                .unwrap_or_default(),
            schemas,
            extensions: attrs.extensions(),
        };

        info!(
            version = %specification.version,
            title = %specification.info.title,
            paths = specification.paths.len(),
            schemas = specification.schemas.len(),
            "specification loaded"
        );
        Ok(specification)
    }
}

/// Parses the document at `location` (path or `file://` URI) in strict mode.
pub fn parse(location: &str) -> AppResult<Specification> {
    parse_with_options(location, ParserOptions::default())
}

/// Parses the document at `location` with explicit options.
pub fn parse_with_options(location: &str, options: ParserOptions) -> AppResult<Specification> {
    parse_source(
        &LocalResolver::new(),
        &DocumentSource::from_location(location),
        options,
    )
}

/// Parses document text (YAML or JSON).
///
/// Relative file references resolve against the working directory.
pub fn parse_str(text: &str, options: ParserOptions) -> AppResult<Specification> {
    parse_source(
        &LocalResolver::new(),
        &DocumentSource::Text(text.to_string()),
        options,
    )
}

/// Parses `source` through any [`DocumentResolver`].
pub fn parse_source(
    resolver: &impl DocumentResolver,
    source: &DocumentSource,
    options: ParserOptions,
) -> AppResult<Specification> {
    let document = resolver.resolve(source)?;
    Parser::new(options).load_specification(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::enums::{OperationMethod, SecurityType};
    use crate::oas::schemas::Schema;
    use serde_json::json;

    const MINIMAL: &str = r#"
openapi: 3.0.3
info:
  title: Minimal
  version: "1.0"
paths: {}
"#;

    #[test]
    fn test_minimal_document() {
        let spec = parse_str(MINIMAL, ParserOptions::default()).unwrap();
        assert_eq!(spec.version, "3.0.3");
        assert_eq!(spec.info.title, "Minimal");
        assert!(spec.paths.is_empty());
        assert!(spec.schemas.is_empty());
        assert!(spec.security_schemas.is_empty());
    }

    #[test]
    fn test_version_is_required() {
        let err = Parser::default()
            .load_specification(&json!({ "info": { "title": "t", "version": "1" } }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Document Error: Invalid OpenAPI schema version");

        let err = Parser::default()
            .load_specification(&json!({ "openapi": 3, "info": { "title": "t", "version": "1" } }))
            .unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }

    #[test]
    fn test_info_is_required() {
        let err = Parser::default()
            .load_specification(&json!({ "openapi": "3.1.0" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'info' in document");
    }

    #[test]
    fn test_components_and_paths() {
        let spec = Parser::default()
            .load_specification(&json!({
                "openapi": "3.1.0",
                "info": { "title": "Pets", "version": "1" },
                "x-api-id": "pets",
                "security": [{ "key": [] }],
                "paths": {
                    "/pets": {
                        "get": {
                            "responses": {
                                "200": {
                                    "description": "ok",
                                    "content": {
                                        "application/json": {
                                            "schema": { "type": "array", "items": { "type": "string" } },
                                        },
                                    },
                                },
                            },
                        },
                    },
                },
                "components": {
                    "schemas": { "Name": { "type": "string" } },
                    "securitySchemes": { "key": { "type": "apiKey", "name": "X-Key", "in": "header" } },
                },
            }))
            .unwrap();

        assert_eq!(spec.extensions["api_id"], json!("pets"));
        assert_eq!(spec.security[0]["key"], Vec::<String>::new());
        assert_eq!(spec.security_schemas["key"].security_type, SecurityType::ApiKey);
        assert!(matches!(spec.schemas["Name"], Schema::String(_)));

        let get = spec.paths[0].operation(OperationMethod::Get).unwrap();
        assert!(matches!(
            get.responses[0].content[0].schema,
            Some(Schema::Array(_))
        ));
    }

    #[test]
    fn test_loose_mode() {
        let document = json!({
            "openapi": "3.0.0",
            "info": { "title": "t", "version": "1" },
            "components": { "schemas": { "Span": { "type": "string", "format": "duration" } } },
        });

        assert!(Parser::new(ParserOptions { strict: true })
            .load_specification(&document)
            .is_err());
        assert!(Parser::new(ParserOptions { strict: false })
            .load_specification(&document)
            .is_ok());
    }
}
