//! Builds `externalDocs` objects.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::models::ExternalDoc;
use serde_json::Value;

/// Builder for [`ExternalDoc`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalDocBuilder;

impl ExternalDocBuilder {
    /// Builds one documentation pointer. `url` is required.
    pub fn build(&self, data: &Value) -> AppResult<ExternalDoc> {
        let attrs = Attributes::new(as_fragment(data, "externalDocs")?, "external doc");
        Ok(ExternalDoc {
            url: attrs.required("url")?,
            description: attrs.optional("description")?,
            extensions: attrs.extensions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build() {
        let doc = ExternalDocBuilder
            .build(&json!({
                "description": "Find more info here",
                "url": "https://example.com",
                "x-audience": "public",
            }))
            .unwrap();

        assert_eq!(doc.url, "https://example.com");
        assert_eq!(doc.description.as_deref(), Some("Find more info here"));
        assert_eq!(doc.extensions["audience"], json!("public"));
    }

    #[test]
    fn test_url_is_required() {
        let err = ExternalDocBuilder
            .build(&json!({ "description": "nowhere" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'url' in external doc");
    }
}
