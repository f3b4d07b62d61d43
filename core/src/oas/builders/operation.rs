//! Builds operations of a path item.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::{ExternalDocBuilder, ParameterBuilder, RequestBuilder, ResponseBuilder};
use crate::oas::enums::{OperationMethod, Vocabulary};
use crate::oas::models::Operation;
use serde_json::Value;

/// Builder for [`Operation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OperationBuilder {
    response: ResponseBuilder,
    external_doc: ExternalDocBuilder,
    request: RequestBuilder,
    parameter: ParameterBuilder,
}

impl OperationBuilder {
    /// Creates an operation builder.
    pub fn new(
        response: ResponseBuilder,
        external_doc: ExternalDocBuilder,
        request: RequestBuilder,
        parameter: ParameterBuilder,
    ) -> Self {
        Self {
            response,
            external_doc,
            request,
            parameter,
        }
    }

    /// Builds the operation declared for `method`.
    pub fn build(&self, method: OperationMethod, data: &Value) -> AppResult<Operation> {
        let attrs = Attributes::new(as_fragment(data, method.as_str())?, "operation");
        Ok(Operation {
            method,
            responses: attrs
                .with("responses", |responses| self.response.build_collection(responses))?
                .unwrap_or_default(),
            summary: attrs.optional("summary")?,
            description: attrs.optional("description")?,
            operation_id: attrs.optional("operationId")?,
            external_docs: attrs.with("externalDocs", |doc| self.external_doc.build(doc))?,
            request_body: attrs.with("requestBody", |body| self.request.build(body))?,
            deprecated: attrs.flag("deprecated")?,
            parameters: attrs
                .with("parameters", |parameters| self.parameter.build_list(parameters))?
                .unwrap_or_default(),
            tags: attrs.optional("tags")?.unwrap_or_default(),
            security: attrs.optional("security")?.unwrap_or_default(),
            extensions: attrs.extensions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::models::ResponseCode;
    use serde_json::json;

    #[test]
    fn test_build() {
        let operation = OperationBuilder::default()
            .build(
                OperationMethod::Post,
                &json!({
                    "tags": ["pet"],
                    "summary": "Add a new pet to the store",
                    "operationId": "addPet",
                    "requestBody": {
                        "content": { "application/json": { "schema": { "type": "object" } } },
                        "required": true,
                    },
                    "responses": { "405": { "description": "Invalid input" } },
                    "security": [{ "petstore_auth": ["write:pets", "read:pets"] }],
                    "x-codegen-name": "create",
                }),
            )
            .unwrap();

        assert_eq!(operation.method, OperationMethod::Post);
        assert_eq!(operation.operation_id.as_deref(), Some("addPet"));
        assert_eq!(operation.tags, ["pet"]);
        assert_eq!(operation.responses[0].code, ResponseCode::Status(405));
        assert!(operation.request_body.unwrap().required);
        assert_eq!(
            operation.security[0]["petstore_auth"],
            ["write:pets", "read:pets"]
        );
        assert_eq!(operation.extensions["codegen_name"], json!("create"));
        assert!(!operation.deprecated);
    }

    #[test]
    fn test_nested_error_propagates() {
        let err = OperationBuilder::default()
            .build(
                OperationMethod::Get,
                &json!({
                    "parameters": [{ "name": "id", "in": "path", "schema": { "type": "float" } }],
                }),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid schema type 'float'");
    }
}
