#![deny(missing_docs)]

//! # Document Models
//!
//! Typed representation of everything in an API description besides schemas.
//!
//! Collections keep source order: lists for repeated items, `IndexMap` where
//! the key is meaningful on its own.

use crate::oas::attributes::Extensions;
use crate::oas::enums::{
    AuthenticationScheme, BaseLocation, ContentType, Loose, OAuthFlowType, OperationMethod,
    ParameterLocation, ParameterStyle, SecurityType,
};
use crate::oas::schemas::Schema;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Scopes required per security scheme name.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// The root of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specification {
    /// Value of the `openapi` key.
    pub version: String,
    /// API metadata.
    pub info: Info,
    /// Servers, in source order.
    pub servers: Vec<Server>,
    /// Tags, in source order.
    pub tags: Vec<Tag>,
    /// `components.securitySchemes` by name.
    pub security_schemas: IndexMap<String, Security>,
    /// Document-wide security requirements.
    pub security: Vec<SecurityRequirement>,
    /// Additional documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDoc>,
    /// Path items, in source order.
    pub paths: Vec<Path>,
    /// `components.schemas` by name.
    pub schemas: IndexMap<String, Schema>,
    /// Vendor extensions of the root.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// Contact information for the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Contact {
    /// Contact name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// License of the API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct License {
    /// License name.
    pub name: String,
    /// License URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version (not the format version).
    pub version: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Terms of service URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    /// Contact information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    /// License.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// A substitution variable of a server URL template.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerVariable {
    /// Value used when none is supplied.
    pub default: String,
    /// Allowed values.
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// A target host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    /// URL, possibly templated.
    pub url: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Template variables by name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, ServerVariable>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// Pointer to additional documentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalDoc {
    /// Documentation URL.
    pub url: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// Grouping label for operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDoc>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// One media type entry of a `content` mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    /// Media type key.
    #[serde(rename = "type")]
    pub content_type: Loose<ContentType>,
    /// Payload schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Single example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Named examples.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Value>,
}

/// An operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Where the parameter is sent.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be sent.
    pub required: bool,
    /// Value schema; absent when `content` is used instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Media type encoded value; absent when `schema` is used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Content>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Marked for removal.
    pub deprecated: bool,
    /// Serialization style.
    pub style: ParameterStyle,
    /// Whether arrays and objects expand into separate parameters.
    pub explode: bool,
    /// Whether reserved characters are sent unencoded.
    pub allow_reserved: bool,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// A request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestBody {
    /// Accepted payloads, in source order.
    pub content: Vec<Content>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the body must be sent.
    pub required: bool,
}

/// A response header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Header name, taken from its key.
    pub name: String,
    /// Value schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the header is always sent.
    pub required: bool,
    /// Marked for removal.
    pub deprecated: bool,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// Key of a `responses` mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    /// A single status code such as `404`.
    Status(u16),
    /// A class of codes such as `2XX`, stored as its leading digit.
    Range(u8),
    /// The `default` fallback.
    Default,
}

impl FromStr for ResponseCode {
    type Err = String;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        if code == "default" {
            return Ok(ResponseCode::Default);
        }
        let bytes = code.as_bytes();
        match bytes {
            [class @ b'1'..=b'5', rest @ ..] if rest.eq_ignore_ascii_case(b"XX") => {
                Ok(ResponseCode::Range(class - b'0'))
            }
            [b'1'..=b'5', b'0'..=b'9', b'0'..=b'9'] => code
                .parse::<u16>()
                .ok()
                .filter(|status| (100..=599).contains(status))
                .map(ResponseCode::Status)
                .ok_or_else(|| format!("invalid response code '{code}'")),
            _ => Err(format!("invalid response code '{code}'")),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Status(status) => write!(f, "{status}"),
            ResponseCode::Range(class) => write!(f, "{class}XX"),
            ResponseCode::Default => f.write_str("default"),
        }
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One possible response of an operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    /// Status code, range or `default`.
    pub code: ResponseCode,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payloads, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Content>,
    /// Headers, in source order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// One HTTP method of a path item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// HTTP method.
    pub method: OperationMethod,
    /// Responses, in source order.
    pub responses: Vec<Response>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique operation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Additional documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDoc>,
    /// Request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Marked for removal.
    pub deprecated: bool,
    /// Operation-level parameters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Tag names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Security requirements overriding the document-wide ones.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security: Vec<SecurityRequirement>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// A path item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// Path template, e.g. `/pets/{id}`.
    pub url: String,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Operations in method order.
    pub operations: Vec<Operation>,
    /// Parameters shared by every operation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

impl Path {
    /// Operation for `method`, if declared.
    pub fn operation(&self, method: OperationMethod) -> Option<&Operation> {
        self.operations.iter().find(|op| op.method == method)
    }
}

/// One OAuth 2 flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    /// Authorization endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    /// Token endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    /// Refresh endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// Scope name to description.
    pub scopes: IndexMap<String, String>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

/// A security scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Security {
    /// Scheme kind.
    #[serde(rename = "type")]
    pub security_type: SecurityType,
    /// Where an API key is sent.
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<BaseLocation>,
    /// API key name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTP authentication scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<AuthenticationScheme>,
    /// Bearer token format hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
    /// OAuth 2 flows by kind.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub flows: IndexMap<OAuthFlowType, OAuthFlow>,
    /// Vendor extensions of the flows object.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub flows_extensions: Extensions,
    /// OpenID Connect discovery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_id_connect_url: Option<String>,
    /// Vendor extensions.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extensions: Extensions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_code_parsing() {
        assert_eq!("200".parse::<ResponseCode>(), Ok(ResponseCode::Status(200)));
        assert_eq!("2XX".parse::<ResponseCode>(), Ok(ResponseCode::Range(2)));
        assert_eq!("4xx".parse::<ResponseCode>(), Ok(ResponseCode::Range(4)));
        assert_eq!("default".parse::<ResponseCode>(), Ok(ResponseCode::Default));
        assert!("600".parse::<ResponseCode>().is_err());
        assert!("ok".parse::<ResponseCode>().is_err());
        assert!("+200".parse::<ResponseCode>().is_err());
        assert!("0200".parse::<ResponseCode>().is_err());
        assert!(" 200".parse::<ResponseCode>().is_err());
    }

    #[test]
    fn test_response_code_display() {
        assert_eq!(ResponseCode::Range(5).to_string(), "5XX");
        assert_eq!(
            serde_json::to_value(ResponseCode::Status(201)).unwrap(),
            serde_json::json!("201")
        );
    }
}
