//! Builds the `info` section.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::models::{Contact, Info, License};
use serde_json::Value;

/// Builder for [`Info`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoBuilder;

impl InfoBuilder {
    /// Builds API metadata. `title` and `version` are required.
    pub fn build(&self, data: &Value) -> AppResult<Info> {
        let attrs = Attributes::new(as_fragment(data, "info")?, "info");
        Ok(Info {
            title: attrs.required("title")?,
            version: attrs.required("version")?,
            description: attrs.optional("description")?,
            terms_of_service: attrs.optional("termsOfService")?,
            contact: attrs.with("contact", contact)?,
            license: attrs.with("license", license)?,
        })
    }
}

fn contact(data: &Value) -> AppResult<Contact> {
    let attrs = Attributes::new(as_fragment(data, "contact")?, "contact");
    Ok(Contact {
        name: attrs.optional("name")?,
        url: attrs.optional("url")?,
        email: attrs.optional("email")?,
    })
}

fn license(data: &Value) -> AppResult<License> {
    let attrs = Attributes::new(as_fragment(data, "license")?, "license");
    Ok(License {
        name: attrs.required("name")?,
        url: attrs.optional("url")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_full_info() {
        let info = InfoBuilder
            .build(&json!({
                "title": "Sample Pet Store App",
                "description": "This is a sample server for a pet store.",
                "termsOfService": "http://example.com/terms/",
                "contact": {
                    "name": "API Support",
                    "url": "http://www.example.com/support",
                    "email": "support@example.com",
                },
                "license": {
                    "name": "Apache 2.0",
                    "url": "https://www.apache.org/licenses/LICENSE-2.0.html",
                },
                "version": "1.0.1",
            }))
            .unwrap();

        assert_eq!(
            info,
            Info {
                title: "Sample Pet Store App".into(),
                version: "1.0.1".into(),
                description: Some("This is a sample server for a pet store.".into()),
                terms_of_service: Some("http://example.com/terms/".into()),
                contact: Some(Contact {
                    name: Some("API Support".into()),
                    url: Some("http://www.example.com/support".into()),
                    email: Some("support@example.com".into()),
                }),
                license: Some(License {
                    name: "Apache 2.0".into(),
                    url: Some("https://www.apache.org/licenses/LICENSE-2.0.html".into()),
                }),
            }
        );
    }

    #[test]
    fn test_minimal_info() {
        let info = InfoBuilder
            .build(&json!({ "title": "API", "version": "1" }))
            .unwrap();
        assert!(info.contact.is_none());
        assert!(info.license.is_none());
    }

    #[test]
    fn test_license_requires_name() {
        let err = InfoBuilder
            .build(&json!({ "title": "API", "version": "1", "license": {} }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required field 'name' in license");
    }
}
