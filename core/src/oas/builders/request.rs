//! Builds `requestBody` objects.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::ContentBuilder;
use crate::oas::models::RequestBody;
use serde_json::Value;

/// Builder for [`RequestBody`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestBuilder {
    content: ContentBuilder,
}

impl RequestBuilder {
    /// Creates a request body builder.
    pub fn new(content: ContentBuilder) -> Self {
        Self { content }
    }

    /// Builds a request body. `content` is required.
    pub fn build(&self, data: &Value) -> AppResult<RequestBody> {
        let attrs = Attributes::new(as_fragment(data, "requestBody")?, "request body");
        let content = attrs
            .with("content", |content| self.content.build_list(content))?
            .ok_or_else(|| AppError::missing("content", "request body"))?;
        Ok(RequestBody {
            content,
            description: attrs.optional("description")?,
            required: attrs.flag("required")?,
        })
    }
}
