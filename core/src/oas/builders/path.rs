//! Builds the `paths` object.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, is_extension_key, Attributes};
use crate::oas::builders::{OperationBuilder, ParameterBuilder};
use crate::oas::enums::{OperationMethod, Vocabulary};
use crate::oas::models::Path;
use serde_json::Value;

/// Builder for [`Path`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PathBuilder {
    operation: OperationBuilder,
    parameter: ParameterBuilder,
}

impl PathBuilder {
    /// Creates a path builder.
    pub fn new(operation: OperationBuilder, parameter: ParameterBuilder) -> Self {
        Self {
            operation,
            parameter,
        }
    }

    /// Builds the path item stored under `url`.
    ///
    /// Operations come out in the fixed method order, whatever the source order.
    pub fn build(&self, url: &str, data: &Value) -> AppResult<Path> {
        let attrs = Attributes::new(as_fragment(data, url)?, "path");
        let operations = OperationMethod::ALL
            .iter()
            .filter_map(|&method| {
                attrs
                    .raw(method.as_str())
                    .map(|operation| self.operation.build(method, operation))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Path {
            url: url.to_string(),
            summary: attrs.optional("summary")?,
            description: attrs.optional("description")?,
            operations,
            parameters: attrs
                .with("parameters", |parameters| self.parameter.build_list(parameters))?
                .unwrap_or_default(),
            extensions: attrs.extensions(),
        })
    }

    /// Builds every path item, keeping source order and skipping `x-` keys.
    pub fn build_collection(&self, data: &Value) -> AppResult<Vec<Path>> {
        as_fragment(data, "paths")?
            .iter()
            .filter(|(url, _)| !is_extension_key(url))
            .map(|(url, path)| self.build(url, path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths() -> Value {
        json!({
            "/pets/{petId}": {
                "summary": "Single pet",
                "parameters": [{ "name": "petId", "in": "path", "required": true, "schema": { "type": "string" } }],
                "delete": { "responses": { "204": { "description": "deleted" } } },
                "get": { "responses": { "200": { "description": "found" } } },
                "x-owner": "pets-team",
            },
            "/pets": { "post": { "responses": {} } },
            "x-paths-meta": { "generated": true },
        })
    }

    #[test]
    fn test_build_collection() {
        let paths = PathBuilder::default().build_collection(&paths()).unwrap();

        let urls: Vec<_> = paths.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(urls, ["/pets/{petId}", "/pets"]);

        let methods: Vec<_> = paths[0].operations.iter().map(|o| o.method).collect();
        assert_eq!(methods, [OperationMethod::Get, OperationMethod::Delete]);
        assert_eq!(paths[0].parameters[0].name, "petId");
        assert_eq!(paths[0].extensions["owner"], json!("pets-team"));
        assert!(paths[1].operation(OperationMethod::Post).is_some());
        assert!(paths[1].operation(OperationMethod::Get).is_none());
    }
}
