#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for interpreting `$ref` strings and walking JSON Pointers.
//!
//! Nothing here touches the filesystem or the network: a reference is only
//! classified and split, the resolver decides what to do with it.

use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::path::PathBuf;
use url::Url;

/// Key marking a reference object.
pub const REF: &str = "$ref";

/// Where a `$ref` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RefTarget {
    /// A pointer into the referring document.
    Local(String),
    /// A pointer into another file, relative or absolute.
    File(PathBuf, String),
    /// Anything needing network access.
    Remote(String),
}

/// Splits a `$ref` into its document part and JSON Pointer fragment.
pub(crate) fn parse_ref(reference: &str) -> RefTarget {
    let (document, fragment) = reference.split_once('#').unwrap_or((reference, ""));
    let pointer = fragment.to_string();

    if document.is_empty() {
        return RefTarget::Local(pointer);
    }

    match Url::parse(document) {
        Ok(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => RefTarget::File(path, pointer),
            Err(()) => RefTarget::Remote(reference.to_string()),
        },
        // Single letter schemes are Windows drive letters.
        Ok(url) if url.scheme().len() > 1 => RefTarget::Remote(reference.to_string()),
        _ => RefTarget::File(
            PathBuf::from(percent_decode_str(document).decode_utf8_lossy().into_owned()),
            pointer,
        ),
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Follows a JSON Pointer (`/components/schemas/Pet`) from `root`.
///
/// The empty pointer and `/` alone both address the root.
pub(crate) fn lookup<'v>(root: &'v Value, pointer: &str) -> Option<&'v Value> {
    let pointer = pointer.trim_start_matches('/');
    if pointer.is_empty() {
        return Some(root);
    }
    pointer
        .split('/')
        .map(decode_pointer_segment)
        .try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(&segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Turns a discriminator mapping value into a `$ref`.
///
/// Bare names address `components/schemas`; anything that looks like a
/// reference is kept.
pub(crate) fn mapping_ref(target: &str) -> String {
    let looks_like_ref = target.contains('#')
        || target.contains('/')
        || [".yaml", ".yml", ".json"]
            .iter()
            .any(|extension| target.ends_with(extension));
    if looks_like_ref {
        target.to_string()
    } else {
        format!("#/components/schemas/{target}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_local_ref() {
        assert_eq!(
            parse_ref("#/components/schemas/User"),
            RefTarget::Local("/components/schemas/User".into())
        );
    }

    #[test]
    fn test_parse_relative_file_ref() {
        assert_eq!(
            parse_ref("common.yaml#/Pet"),
            RefTarget::File(PathBuf::from("common.yaml"), "/Pet".into())
        );
        assert_eq!(
            parse_ref("schemas/error.json"),
            RefTarget::File(PathBuf::from("schemas/error.json"), String::new())
        );
    }

    #[test]
    fn test_parse_remote_ref() {
        let reference = "https://example.com/openapi.yaml#/components/schemas/User";
        assert_eq!(parse_ref(reference), RefTarget::Remote(reference.into()));
    }

    #[test]
    fn test_decode_pointer_segment_percent_encoding() {
        let encoded = "User%20Profile~1details";
        let decoded = decode_pointer_segment(encoded);
        assert_eq!(decoded, "User Profile/details");
    }

    #[test]
    fn test_lookup() {
        let root = json!({
            "paths": { "/pets/{id}": { "get": { "tags": ["a", "b"] } } },
            "tilde~key": 1,
        });

        assert_eq!(
            lookup(&root, "/paths/~1pets~1{id}/get/tags/1"),
            Some(&json!("b"))
        );
        assert_eq!(lookup(&root, "/tilde~0key"), Some(&json!(1)));
        assert_eq!(lookup(&root, ""), Some(&root));
        assert_eq!(lookup(&root, "/missing"), None);
    }

    #[test]
    fn test_mapping_ref() {
        assert_eq!(mapping_ref("Cat"), "#/components/schemas/Cat");
        assert_eq!(mapping_ref("#/components/schemas/Dog"), "#/components/schemas/Dog");
        assert_eq!(mapping_ref("lizard.yaml"), "lizard.yaml");
    }
}
