//! Builds `components.securitySchemes`.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::OAuthFlowBuilder;
use crate::oas::enums::{AuthenticationScheme, Vocabulary};
use crate::oas::models::Security;
use indexmap::IndexMap;
use serde_json::Value;

/// Builder for [`Security`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityBuilder {
    oauth_flow: OAuthFlowBuilder,
}

impl SecurityBuilder {
    /// Creates a security scheme builder.
    pub fn new(oauth_flow: OAuthFlowBuilder) -> Self {
        Self { oauth_flow }
    }

    /// Builds one security scheme.
    pub fn build(&self, data: &Value) -> AppResult<Security> {
        let attrs = Attributes::new(as_fragment(data, "securitySchemes")?, "security scheme");
        let (flows, flows_extensions) = match attrs.mapping("flows")? {
            Some(flows) => self.oauth_flow.build_collection(flows)?,
            None => Default::default(),
        };
        Ok(Security {
            security_type: attrs.required("type")?,
            location: attrs.optional("in")?,
            name: attrs.optional("name")?,
            description: attrs.optional("description")?,
            scheme: attrs.with("scheme", scheme)?,
            bearer_format: attrs.optional("bearerFormat")?,
            flows,
            flows_extensions,
            open_id_connect_url: attrs.optional("openIdConnectUrl")?,
            extensions: attrs.extensions(),
        })
    }

    /// Builds every scheme by name, keeping order.
    pub fn build_collection(&self, data: &Value) -> AppResult<IndexMap<String, Security>> {
        as_fragment(data, "securitySchemes")?
            .iter()
            .map(|(name, scheme)| Ok((name.clone(), self.build(scheme)?)))
            .collect()
    }
}

/// HTTP scheme names are case-insensitive (RFC 7235).
fn scheme(value: &Value) -> AppResult<AuthenticationScheme> {
    value
        .as_str()
        .and_then(|name| AuthenticationScheme::lookup(&name.to_ascii_lowercase()))
        .ok_or_else(|| AppError::invalid("scheme", value, AuthenticationScheme::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::enums::{BaseLocation, OAuthFlowType, SecurityType};
    use serde_json::json;

    #[test]
    fn test_build_collection() {
        let schemes = SecurityBuilder::default()
            .build_collection(&json!({
                "api_key": { "type": "apiKey", "name": "api_key", "in": "header" },
                "basic": { "type": "http", "scheme": "Basic" },
                "jwt": { "type": "http", "scheme": "bearer", "bearerFormat": "JWT" },
                "petstore_auth": {
                    "type": "oauth2",
                    "flows": {
                        "implicit": {
                            "authorizationUrl": "https://example.org/api/oauth/dialog",
                            "scopes": { "write:pets": "modify pets in your account" },
                        },
                        "x-flows-note": "legacy",
                    },
                },
                "oidc": { "type": "openIdConnect", "openIdConnectUrl": "https://example.com/.well-known" },
            }))
            .unwrap();

        let names: Vec<_> = schemes.keys().map(String::as_str).collect();
        assert_eq!(names, ["api_key", "basic", "jwt", "petstore_auth", "oidc"]);

        assert_eq!(schemes["api_key"].location, Some(BaseLocation::Header));
        assert_eq!(schemes["basic"].scheme, Some(AuthenticationScheme::Basic));
        assert_eq!(schemes["jwt"].bearer_format.as_deref(), Some("JWT"));

        let oauth = &schemes["petstore_auth"];
        assert_eq!(oauth.security_type, SecurityType::OAuth2);
        assert!(oauth.flows.contains_key(&OAuthFlowType::Implicit));
        assert_eq!(oauth.flows_extensions["flows_note"], json!("legacy"));

        assert_eq!(
            schemes["oidc"].open_id_connect_url.as_deref(),
            Some("https://example.com/.well-known")
        );
    }

    #[test]
    fn test_unknown_scheme() {
        let err = SecurityBuilder::default()
            .build(&json!({ "type": "http", "scheme": "magic" }))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidValue { ref field, .. } if field == "scheme"));
    }

    #[test]
    fn test_type_is_required() {
        let err = SecurityBuilder::default()
            .build(&json!({ "name": "api_key" }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field 'type' in security scheme"
        );
    }
}
