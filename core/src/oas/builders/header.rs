//! Builds response `headers` mappings.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::models::Header;
use crate::oas::schemas::SchemaFactory;
use serde_json::Value;

/// Builder for [`Header`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderBuilder {
    factory: SchemaFactory,
}

impl HeaderBuilder {
    /// Creates a header builder.
    pub fn new(factory: SchemaFactory) -> Self {
        Self { factory }
    }

    /// Builds the header stored under `name`.
    pub fn build(&self, name: &str, data: &Value) -> AppResult<Header> {
        let attrs = Attributes::new(as_fragment(data, name)?, "header");
        Ok(Header {
            name: name.to_string(),
            schema: attrs.with("schema", |schema| self.factory.create(schema))?,
            description: attrs.optional("description")?,
            required: attrs.flag("required")?,
            deprecated: attrs.flag("deprecated")?,
            extensions: attrs.extensions(),
        })
    }

    /// Builds every header of a `headers` mapping, keeping order.
    pub fn build_collection(&self, data: &Value) -> AppResult<Vec<Header>> {
        as_fragment(data, "headers")?
            .iter()
            .map(|(name, header)| self.build(name, header))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::schemas::Schema;
    use serde_json::json;

    #[test]
    fn test_build_collection() {
        let headers = HeaderBuilder::default()
            .build_collection(&json!({
                "X-Rate-Limit-Limit": {
                    "description": "The number of allowed requests in the current period",
                    "schema": { "type": "integer" },
                },
                "X-Expires-After": {
                    "deprecated": true,
                    "schema": { "type": "string", "format": "date-time" },
                },
            }))
            .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].name, "X-Rate-Limit-Limit");
        assert!(matches!(headers[0].schema, Some(Schema::Integer(_))));
        assert!(!headers[0].required);
        assert!(headers[1].deprecated);
    }
}
