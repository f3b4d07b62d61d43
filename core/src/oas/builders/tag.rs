//! Builds the `tags` list.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::{build_each, ExternalDocBuilder};
use crate::oas::models::Tag;
use serde_json::Value;

/// Builder for [`Tag`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TagBuilder {
    external_doc: ExternalDocBuilder,
}

impl TagBuilder {
    /// Creates a tag builder delegating `externalDocs` to `external_doc`.
    pub fn new(external_doc: ExternalDocBuilder) -> Self {
        Self { external_doc }
    }

    /// Builds one tag.
    pub fn build(&self, data: &Value) -> AppResult<Tag> {
        let attrs = Attributes::new(as_fragment(data, "tags")?, "tag");
        Ok(Tag {
            name: attrs.required("name")?,
            description: attrs.optional("description")?,
            external_docs: attrs.with("externalDocs", |doc| self.external_doc.build(doc))?,
            extensions: attrs.extensions(),
        })
    }

    /// Builds a list of tags, keeping order.
    pub fn build_list(&self, data: &Value) -> AppResult<Vec<Tag>> {
        build_each(data, "tags", |tag| self.build(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_list() {
        let tags = TagBuilder::default()
            .build_list(&json!([
                { "name": "pets", "description": "Everything about pets" },
                { "name": "store", "externalDocs": { "url": "https://example.com/store" } },
            ]))
            .unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "pets");
        assert_eq!(
            tags[1].external_docs.as_ref().map(|doc| doc.url.as_str()),
            Some("https://example.com/store")
        );
    }

    #[test]
    fn test_list_must_be_a_sequence() {
        assert!(TagBuilder::default()
            .build_list(&json!({ "name": "pets" }))
            .is_err());
    }
}
