//! Builds `responses` mappings.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, is_extension_key, Attributes};
use crate::oas::builders::{ContentBuilder, HeaderBuilder};
use crate::oas::models::{Response, ResponseCode};
use serde_json::Value;

/// Builder for [`Response`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseBuilder {
    content: ContentBuilder,
    header: HeaderBuilder,
}

impl ResponseBuilder {
    /// Creates a response builder.
    pub fn new(content: ContentBuilder, header: HeaderBuilder) -> Self {
        Self { content, header }
    }

    /// Builds the response stored under `code`.
    pub fn build(&self, code: ResponseCode, data: &Value) -> AppResult<Response> {
        let attrs = Attributes::new(as_fragment(data, "responses")?, "response");
        Ok(Response {
            code,
            description: attrs.optional("description")?,
            content: attrs
                .with("content", |content| self.content.build_list(content))?
                .unwrap_or_default(),
            headers: attrs
                .with("headers", |headers| self.header.build_collection(headers))?
                .unwrap_or_default(),
            extensions: attrs.extensions(),
        })
    }

    /// Builds every response of a `responses` mapping, keeping order.
    ///
    /// Keys are status codes, ranges such as `4XX`, or `default`; vendor
    /// extension keys are skipped.
    pub fn build_collection(&self, data: &Value) -> AppResult<Vec<Response>> {
        as_fragment(data, "responses")?
            .iter()
            .filter(|(key, _)| !is_extension_key(key))
            .map(|(key, response)| {
                let code = key.parse::<ResponseCode>().map_err(|_| {
                    AppError::invalid(
                        "responses",
                        &Value::String(key.clone()),
                        "status code, range or 'default'",
                    )
                })?;
                self.build(code, response)
            })
            .collect()
    }
}
