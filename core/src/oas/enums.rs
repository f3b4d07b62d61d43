#![deny(missing_docs)]

//! # Vocabularies
//!
//! Closed, string-valued vocabularies used across the document model.
//!
//! Open vocabularies (formats, media types) are read through [`Loose`], which
//! keeps known values typed and, when the factory is not strict, wraps unknown
//! ones instead of rejecting them.

use crate::error::AppError;
use crate::oas::attributes::FromAttribute;
use crate::oas::media_types::MEDIA_TYPES;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A closed set of string literals with a typed representation.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Vocabulary name used in error messages.
    const NAME: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// The literal this member is written as in documents.
    fn as_str(&self) -> &'static str;

    /// Looks up a member by its literal.
    fn lookup(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.as_str() == value)
    }
}

/// Conversions shared by every vocabulary type.
macro_rules! vocabulary_impls {
    ($name:ident, $label:literal) => {
        impl FromStr for $name {
            type Err = AppError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <$name as Vocabulary>::lookup(value).ok_or_else(|| {
                    AppError::invalid($label, &Value::String(value.to_string()), $label)
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl FromAttribute for $name {
            const EXPECTED: &'static str = $label;

            fn from_attribute(value: &Value, _strict: bool) -> Option<Self> {
                value.as_str().and_then(<$name as Vocabulary>::lookup)
            }
        }
    };
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Vocabulary for $name {
            const NAME: &'static str = $label;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        vocabulary_impls!($name, $label);
    };
}

vocabulary! {
    /// Schema kind named by the `type` tag.
    DataType, "schema type" {
        /// `null`
        Null => "null",
        /// `integer`
        Integer => "integer",
        /// `number`
        Number => "number",
        /// `string`
        String => "string",
        /// `boolean`
        Boolean => "boolean",
        /// `array`
        Array => "array",
        /// `object`
        Object => "object",
        /// Exclusive union (`oneOf`).
        OneOf => "oneOf",
        /// Non-exclusive union (`anyOf`).
        AnyOf => "anyOf",
    }
}

impl DataType {
    /// Concrete kinds a fragment without any type information may take.
    pub const IMPLICIT: [DataType; 6] = [
        DataType::Integer,
        DataType::Number,
        DataType::String,
        DataType::Boolean,
        DataType::Array,
        DataType::Object,
    ];
}

vocabulary! {
    /// `format` values of integer schemas.
    IntegerFormat, "integer format" {
        /// Signed 32 bits.
        Int32 => "int32",
        /// Signed 64 bits.
        Int64 => "int64",
    }
}

vocabulary! {
    /// `format` values of number schemas.
    NumberFormat, "number format" {
        /// Single precision.
        Float => "float",
        /// Double precision.
        Double => "double",
    }
}

vocabulary! {
    /// `format` values of string schemas.
    StringFormat, "string format" {
        /// Base64 encoded characters.
        Byte => "byte",
        /// Any sequence of octets.
        Binary => "binary",
        /// RFC 3339 full-date.
        Date => "date",
        /// RFC 3339 date-time.
        DateTime => "date-time",
        /// Obscured input hint.
        Password => "password",
        /// RFC 4122 UUID.
        Uuid => "uuid",
        /// Version 4 UUID.
        Uuid4 => "uuid4",
        /// RFC 5321 mailbox.
        Email => "email",
        /// RFC 3986 URI.
        Uri => "uri",
        /// RFC 1123 host name.
        Hostname => "hostname",
        /// Dotted-quad IPv4 address.
        Ipv4 => "ipv4",
        /// RFC 4291 IPv6 address.
        Ipv6 => "ipv6",
        /// URL.
        Url => "url",
    }
}

vocabulary! {
    /// HTTP methods a path item may hold operations for.
    OperationMethod, "operation method" {
        /// GET
        Get => "get",
        /// PUT
        Put => "put",
        /// POST
        Post => "post",
        /// DELETE
        Delete => "delete",
        /// OPTIONS
        Options => "options",
        /// HEAD
        Head => "head",
        /// PATCH
        Patch => "patch",
        /// TRACE
        Trace => "trace",
    }
}

vocabulary! {
    /// Where an API key is sent.
    BaseLocation, "api key location" {
        /// Request header.
        Header => "header",
        /// Query string.
        Query => "query",
        /// Cookie.
        Cookie => "cookie",
    }
}

vocabulary! {
    /// Where a parameter is sent (`in`).
    ParameterLocation, "parameter location" {
        /// Request header.
        Header => "header",
        /// Query string.
        Query => "query",
        /// Cookie.
        Cookie => "cookie",
        /// Templated path segment.
        Path => "path",
    }
}

impl ParameterLocation {
    /// Styles a parameter in this location may declare.
    pub fn allowed_styles(&self) -> &'static [ParameterStyle] {
        match self {
            ParameterLocation::Path => &[
                ParameterStyle::Matrix,
                ParameterStyle::Label,
                ParameterStyle::Simple,
            ],
            ParameterLocation::Query => &[
                ParameterStyle::Form,
                ParameterStyle::SpaceDelimited,
                ParameterStyle::PipeDelimited,
                ParameterStyle::DeepObject,
            ],
            ParameterLocation::Header => &[ParameterStyle::Simple],
            ParameterLocation::Cookie => &[ParameterStyle::Form],
        }
    }

    /// Style used when the parameter declares none.
    pub fn default_style(&self) -> ParameterStyle {
        match self {
            ParameterLocation::Path | ParameterLocation::Header => ParameterStyle::Simple,
            ParameterLocation::Query | ParameterLocation::Cookie => ParameterStyle::Form,
        }
    }
}

vocabulary! {
    /// Parameter serialization style.
    ParameterStyle, "parameter style" {
        /// `matrix` (path)
        Matrix => "matrix",
        /// `label` (path)
        Label => "label",
        /// `form` (query, cookie)
        Form => "form",
        /// `simple` (path, header)
        Simple => "simple",
        /// `spaceDelimited` (query)
        SpaceDelimited => "spaceDelimited",
        /// `pipeDelimited` (query)
        PipeDelimited => "pipeDelimited",
        /// `deepObject` (query)
        DeepObject => "deepObject",
    }
}

vocabulary! {
    /// Security scheme kind.
    SecurityType, "security type" {
        /// API key.
        ApiKey => "apiKey",
        /// HTTP authentication.
        Http => "http",
        /// OAuth 2 flows.
        OAuth2 => "oauth2",
        /// OpenID Connect discovery.
        OpenIdConnect => "openIdConnect",
        /// Mutual TLS.
        MutualTls => "mutualTLS",
    }
}

vocabulary! {
    /// IANA HTTP authentication schemes.
    AuthenticationScheme, "authentication scheme" {
        /// RFC 7617
        Basic => "basic",
        /// RFC 6750
        Bearer => "bearer",
        /// RFC 7616
        Digest => "digest",
        /// RFC 7486
        Hoba => "hoba",
        /// RFC 8120
        Mutual => "mutual",
        /// RFC 4559
        Negotiate => "negotiate",
        /// RFC 5849
        OAuth => "oauth",
        /// RFC 7804, SHA-1
        ScramSha1 => "scram-sha-1",
        /// RFC 7804, SHA-256
        ScramSha256 => "scram-sha-256",
        /// RFC 8292
        Vapid => "vapid",
    }
}

vocabulary! {
    /// OAuth 2 flow kinds.
    OAuthFlowType, "oauth flow type" {
        /// Implicit grant.
        Implicit => "implicit",
        /// Resource owner password grant.
        Password => "password",
        /// Client credentials grant.
        ClientCredentials => "clientCredentials",
        /// Authorization code grant.
        AuthorizationCode => "authorizationCode",
    }
}

/// A media type usable as a `content` key.
///
/// Members are the registered media types plus the wildcard ranges OpenAPI
/// accepts. Lookups ignore ASCII case; parameters (`; charset=utf-8`) are not
/// stripped, so such keys are unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentType(&'static str);

impl ContentType {
    /// `application/json`
    pub const JSON: ContentType = ContentType("application/json");
    /// `application/problem+json`
    pub const JSON_PROBLEM: ContentType = ContentType("application/problem+json");
    /// `application/*+json`
    pub const JSON_ANY: ContentType = ContentType("application/*+json");
    /// `text/json`
    pub const JSON_TEXT: ContentType = ContentType("text/json");
    /// `application/xml`
    pub const XML: ContentType = ContentType("application/xml");
    /// `application/x-www-form-urlencoded`
    pub const FORM: ContentType = ContentType("application/x-www-form-urlencoded");
    /// `multipart/form-data`
    pub const MULTIPART_FORM: ContentType = ContentType("multipart/form-data");
    /// `text/plain`
    pub const PLAIN_TEXT: ContentType = ContentType("text/plain");
    /// `application/octet-stream`
    pub const BINARY: ContentType = ContentType("application/octet-stream");
    /// `*/*`
    pub const ANY: ContentType = ContentType("*/*");

    pub(crate) const fn new(literal: &'static str) -> Self {
        ContentType(literal)
    }
}

impl Vocabulary for ContentType {
    const NAME: &'static str = "media type";
    const ALL: &'static [Self] = MEDIA_TYPES;

    fn as_str(&self) -> &'static str {
        self.0
    }

    fn lookup(value: &str) -> Option<Self> {
        let value = value.to_ascii_lowercase();
        MEDIA_TYPES
            .binary_search_by(|member| member.0.cmp(value.as_str()))
            .ok()
            .map(|index| MEDIA_TYPES[index])
    }
}

vocabulary_impls!(ContentType, "media type");

/// A value from an open vocabulary.
///
/// `Unknown` is only ever produced by a non-strict factory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Loose<T> {
    /// A member of the vocabulary.
    Known(T),
    /// Any other literal, kept verbatim.
    Unknown(String),
}

impl<T: Vocabulary> Loose<T> {
    /// The literal as written in the document.
    pub fn as_str(&self) -> &str {
        match self {
            Loose::Known(known) => known.as_str(),
            Loose::Unknown(other) => other,
        }
    }

    /// The typed member, if known.
    pub fn known(&self) -> Option<T> {
        match self {
            Loose::Known(known) => Some(*known),
            Loose::Unknown(_) => None,
        }
    }

    /// Reads a literal, wrapping unknown values unless `strict`.
    pub fn parse(value: &str, strict: bool) -> Option<Self> {
        match T::lookup(value) {
            Some(known) => Some(Loose::Known(known)),
            None if !strict => Some(Loose::Unknown(value.to_string())),
            None => None,
        }
    }
}

impl<T> From<T> for Loose<T> {
    fn from(known: T) -> Self {
        Loose::Known(known)
    }
}

impl<T: Vocabulary> fmt::Display for Loose<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Vocabulary> Serialize for Loose<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<T: Vocabulary> FromAttribute for Loose<T> {
    const EXPECTED: &'static str = T::NAME;

    fn from_attribute(value: &Value, strict: bool) -> Option<Self> {
        value.as_str().and_then(|literal| Loose::parse(literal, strict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_media_type() {
        let cases = [
            ("application/json", ContentType::JSON),
            ("application/*+json", ContentType::JSON_ANY),
            ("application/problem+json", ContentType::JSON_PROBLEM),
            ("text/json", ContentType::JSON_TEXT),
            ("multipart/form-data", ContentType::MULTIPART_FORM),
            ("application/octet-stream", ContentType::BINARY),
            ("*/*", ContentType::ANY),
        ];
        for (literal, expected) in cases {
            assert_eq!(literal.parse::<ContentType>().unwrap(), expected);
        }
        assert!("invalid".parse::<ContentType>().is_err());
        assert!("application/json; charset=utf-8".parse::<ContentType>().is_err());
    }

    #[test]
    fn test_registered_media_types() {
        for literal in [
            "application/ld+json",
            "application/geo+json",
            "application/vnd.api+json",
            "application/yaml",
            "audio/mpeg",
            "font/woff2",
            "model/gltf+json",
            "text/markdown",
            "video/mp4",
        ] {
            let media_type = literal.parse::<ContentType>().unwrap();
            assert_eq!(media_type.as_str(), literal);
        }
    }

    #[test]
    fn test_media_type_ranges_and_case() {
        for literal in ["message/*", "model/*", "multipart", "image/*", "video/*"] {
            assert!(literal.parse::<ContentType>().is_ok(), "{literal}");
        }
        assert_eq!(
            "Application/JSON".parse::<ContentType>().unwrap(),
            ContentType::JSON
        );
    }

    #[test]
    fn test_data_type_vocabulary_is_closed() {
        assert_eq!("oneOf".parse::<DataType>().unwrap(), DataType::OneOf);
        assert!("float".parse::<DataType>().is_err());
        assert_eq!(DataType::ALL.len(), 9);
    }

    #[test]
    fn test_loose_strict_rejects_unknown() {
        assert_eq!(
            Loose::<StringFormat>::from_attribute(&json!("uuid"), true),
            Some(Loose::Known(StringFormat::Uuid))
        );
        assert_eq!(
            Loose::<StringFormat>::from_attribute(&json!("duration"), true),
            None
        );
        assert_eq!(
            Loose::<StringFormat>::from_attribute(&json!("duration"), false),
            Some(Loose::Unknown("duration".into()))
        );
    }

    #[test]
    fn test_loose_serializes_as_literal() {
        let known: Loose<IntegerFormat> = IntegerFormat::Int64.into();
        let unknown: Loose<IntegerFormat> = Loose::Unknown("int128".into());
        assert_eq!(serde_json::to_value(&known).unwrap(), json!("int64"));
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("int128"));
    }

    #[test]
    fn test_parameter_style_defaults() {
        assert_eq!(
            ParameterLocation::Query.default_style(),
            ParameterStyle::Form
        );
        assert_eq!(
            ParameterLocation::Header.default_style(),
            ParameterStyle::Simple
        );
        assert!(!ParameterLocation::Header
            .allowed_styles()
            .contains(&ParameterStyle::Form));
    }
}
