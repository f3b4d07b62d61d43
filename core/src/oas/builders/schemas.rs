//! Builds `components.schemas`.

use crate::error::AppResult;
use crate::oas::attributes::as_fragment;
use crate::oas::schemas::{Schema, SchemaFactory};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

/// Builder for the named schema collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemasBuilder {
    factory: SchemaFactory,
}

impl SchemasBuilder {
    /// Creates a collection builder.
    pub fn new(factory: SchemaFactory) -> Self {
        Self { factory }
    }

    /// Builds every named schema, keeping order.
    pub fn build_collection(&self, data: &Value) -> AppResult<IndexMap<String, Schema>> {
        let schemas = as_fragment(data, "schemas")?;
        debug!(
            count = schemas.len(),
            names = ?schemas.keys().collect::<Vec<_>>(),
            "building component schemas"
        );
        schemas
            .iter()
            .map(|(name, schema)| Ok((name.clone(), self.factory.create(schema)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::enums::DataType;
    use serde_json::json;

    #[test]
    fn test_build_collection() {
        let schemas = SchemasBuilder::default()
            .build_collection(&json!({
                "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
                "Id": { "type": "integer", "format": "int64" },
                "Anything": {},
            }))
            .unwrap();

        let kinds: Vec<_> = schemas
            .iter()
            .map(|(name, schema)| (name.as_str(), schema.data_type()))
            .collect();
        assert_eq!(
            kinds,
            [
                ("Pet", DataType::Object),
                ("Id", DataType::Integer),
                ("Anything", DataType::AnyOf),
            ]
        );
    }

    #[test]
    fn test_error_in_one_schema_fails_collection() {
        let result = SchemasBuilder::default().build_collection(&json!({
            "Ok": { "type": "string" },
            "Broken": { "type": "array" },
        }));
        assert!(result.is_err());
    }
}
