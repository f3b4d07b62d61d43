//! Builds `content` mappings (media type to payload description).
//!
//! Media type keys go through the same strict/loose switch as schema formats.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::enums::{ContentType, Loose, Vocabulary};
use crate::oas::models::Content;
use crate::oas::schemas::SchemaFactory;
use serde_json::Value;

/// Builder for [`Content`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentBuilder {
    factory: SchemaFactory,
}

impl ContentBuilder {
    /// Creates a content builder sharing the strictness of `factory`.
    pub fn new(factory: SchemaFactory) -> Self {
        Self { factory }
    }

    /// Builds the entry for one media type.
    pub fn build(&self, media_type: &str, data: &Value) -> AppResult<Content> {
        let content_type = Loose::<ContentType>::parse(media_type, self.factory.is_strict())
            .ok_or_else(|| {
                AppError::invalid(
                    "content",
                    &Value::String(media_type.to_string()),
                    ContentType::NAME,
                )
            })?;
        let attrs = Attributes::new(as_fragment(data, media_type)?, "content");
        Ok(Content {
            content_type,
            schema: attrs.with("schema", |schema| self.factory.create(schema))?,
            example: attrs.optional("example")?,
            examples: attrs.optional("examples")?.unwrap_or_default(),
        })
    }

    /// Builds every entry of a `content` mapping, keeping order.
    pub fn build_list(&self, data: &Value) -> AppResult<Vec<Content>> {
        as_fragment(data, "content")?
            .iter()
            .map(|(media_type, entry)| self.build(media_type, entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::schemas::Schema;
    use serde_json::json;

    fn data() -> Value {
        json!({
            "application/json": { "schema": { "type": "string" } },
            "application/xml": { "schema": { "type": "integer" }, "example": 3 },
            "text/plain": {},
        })
    }

    #[test]
    fn test_build_list_keeps_order() {
        let contents = ContentBuilder::default().build_list(&data()).unwrap();

        let types: Vec<_> = contents.iter().map(|c| c.content_type.as_str()).collect();
        assert_eq!(types, ["application/json", "application/xml", "text/plain"]);
        assert!(matches!(contents[0].schema, Some(Schema::String(_))));
        assert_eq!(contents[1].example, Some(json!(3)));
        assert!(contents[2].schema.is_none());
    }

    #[test]
    fn test_unknown_media_type_strict_and_loose() {
        let data = json!({ "application/vnd.custom+json": { "schema": { "type": "string" } } });

        let err = ContentBuilder::default().build_list(&data).unwrap_err();
        assert!(matches!(err, AppError::InvalidValue { ref field, .. } if field == "content"));

        let contents = ContentBuilder::new(SchemaFactory::with_strict(false))
            .build_list(&data)
            .unwrap();
        assert_eq!(
            contents[0].content_type,
            Loose::Unknown("application/vnd.custom+json".into())
        );
    }

    #[test]
    fn test_registered_media_type_in_strict_mode() {
        let data = json!({ "application/ld+json": { "schema": { "type": "object" } } });

        let contents = ContentBuilder::default().build_list(&data).unwrap();
        assert_eq!(contents[0].content_type.as_str(), "application/ld+json");
        assert!(contents[0].content_type.known().is_some());
    }
}
