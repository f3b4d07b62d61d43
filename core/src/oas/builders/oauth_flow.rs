//! Builds the OAuth 2 `flows` object of a security scheme.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::{
    as_fragment, extract_extensions, is_extension_key, Attributes, Extensions, Fragment,
};
use crate::oas::enums::{OAuthFlowType, Vocabulary};
use crate::oas::models::OAuthFlow;
use indexmap::IndexMap;
use serde_json::Value;

/// Builder for [`OAuthFlow`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OAuthFlowBuilder;

impl OAuthFlowBuilder {
    /// Builds one flow.
    pub fn build(&self, data: &Value) -> AppResult<OAuthFlow> {
        let attrs = Attributes::new(as_fragment(data, "flows")?, "oauth flow");
        Ok(OAuthFlow {
            authorization_url: attrs.optional("authorizationUrl")?,
            token_url: attrs.optional("tokenUrl")?,
            refresh_url: attrs.optional("refreshUrl")?,
            scopes: attrs.optional("scopes")?.unwrap_or_default(),
            extensions: attrs.extensions(),
        })
    }

    /// Builds every flow of a `flows` object.
    ///
    /// Returns the flows by kind together with the object's own extensions.
    pub fn build_collection(
        &self,
        data: &Fragment,
    ) -> AppResult<(IndexMap<OAuthFlowType, OAuthFlow>, Extensions)> {
        let flows = data
            .iter()
            .filter(|(key, _)| !is_extension_key(key))
            .map(|(key, flow)| {
                let flow_type = OAuthFlowType::lookup(key).ok_or_else(|| {
                    AppError::invalid("flows", &Value::String(key.clone()), OAuthFlowType::NAME)
                })?;
                Ok((flow_type, self.build(flow)?))
            })
            .collect::<AppResult<IndexMap<_, _>>>()?;
        Ok((flows, extract_extensions(data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_collection() {
        let data = json!({
            "implicit": {
                "authorizationUrl": "https://example.com/api/oauth/dialog",
                "scopes": { "write:pets": "modify pets", "read:pets": "read pets" },
            },
            "clientCredentials": { "tokenUrl": "https://example.com/token", "x-ttl": 60 },
            "x-provider": "internal",
        });

        let (flows, extensions) = OAuthFlowBuilder
            .build_collection(data.as_object().unwrap())
            .unwrap();

        assert_eq!(flows.len(), 2);
        let implicit = &flows[&OAuthFlowType::Implicit];
        assert_eq!(implicit.scopes["read:pets"], "read pets");
        assert!(implicit.token_url.is_none());
        assert_eq!(
            flows[&OAuthFlowType::ClientCredentials].extensions["ttl"],
            json!(60)
        );
        assert_eq!(extensions["provider"], json!("internal"));
    }

    #[test]
    fn test_unknown_flow() {
        let data = json!({ "deviceCode": {} });
        assert!(OAuthFlowBuilder
            .build_collection(data.as_object().unwrap())
            .is_err());
    }
}
