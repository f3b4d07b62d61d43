#![deny(missing_docs)]

//! # Document Resolver
//!
//! Loads a document and inlines every `$ref`, producing one self-contained
//! value for the builders.
//!
//! - Local pointers (`#/components/schemas/Pet`) and relative files
//!   (`common.yaml#/Pet`) are followed; each external file is read once.
//! - Keys written next to `$ref` overlay the resolved target.
//! - Discriminator `mapping` values are replaced by the schema they name.
//! - Remote (`http(s)`) references fail. No network access is performed.
//! - Cyclic references fail, since the typed tree has no way to express them.
//! - Resolved trees nested deeper than [`MAX_NESTING`] fail, however many
//!   `$ref` hops built them.

use crate::error::{AppError, AppResult};
use crate::oas::attributes::Fragment;
use crate::oas::ref_utils::{lookup, mapping_ref, parse_ref, RefTarget, REF};
use crate::oas::schemas::factory::MAX_DEPTH;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;
use url::Url;

/// Default limit on nested `$ref` hops.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Deepest value nesting accepted in a resolved document, counting inlined targets.
pub const MAX_NESTING: usize = 4 * MAX_DEPTH;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A filesystem path.
    Path(PathBuf),
    /// A URI such as `file:///srv/api/openapi.yaml`.
    Uri(String),
    /// The document text itself, YAML or JSON.
    Text(String),
}

impl DocumentSource {
    /// Classifies a user supplied location as a URI or a path.
    pub fn from_location(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if url.scheme().len() > 1 => DocumentSource::Uri(location.to_string()),
            _ => DocumentSource::Path(PathBuf::from(location)),
        }
    }
}

/// Produces a fully dereferenced document.
pub trait DocumentResolver {
    /// Loads `source` and inlines its references.
    fn resolve(&self, source: &DocumentSource) -> AppResult<Value>;
}

/// Resolver for local files and in-memory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalResolver {
    max_depth: usize,
}

impl Default for LocalResolver {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LocalResolver {
    /// Creates a resolver with the default depth limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the limit on nested `$ref` hops.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl DocumentResolver for LocalResolver {
    fn resolve(&self, source: &DocumentSource) -> AppResult<Value> {
        let document = match source {
            DocumentSource::Path(path) => Document::load(path)?,
            DocumentSource::Uri(uri) => Document::load(&uri_to_path(uri)?)?,
            DocumentSource::Text(text) => Document {
                path: None,
                root: Rc::new(parse_text(text)?),
            },
        };
        debug!(path = ?document.path, "resolving document");

        let mut resolution = Resolution {
            max_depth: self.max_depth,
            loaded: HashMap::new(),
            chain: Vec::new(),
        };
        if let Some(path) = &document.path {
            resolution.loaded.insert(path.clone(), document.root.clone());
        }

        let resolved = resolution.value(&document.root, &document, 0)?;
        debug!(documents = resolution.loaded.len(), "document resolved");
        Ok(resolved)
    }
}

/// Parses YAML or JSON text into an order-preserving value.
pub fn parse_text(text: &str) -> AppResult<Value> {
    if text.trim_start().starts_with('{') {
        if let Ok(value) = serde_json::from_str(text) {
            return Ok(value);
        }
    }
    serde_yaml::from_str(text)
        .map_err(|e| AppError::Document(format!("Failed to parse document: {}", e)))
}

fn uri_to_path(uri: &str) -> AppResult<PathBuf> {
    let url = Url::parse(uri)
        .map_err(|e| AppError::Document(format!("Invalid document URI '{}': {}", uri, e)))?;
    if url.scheme() != "file" {
        return Err(AppError::Document(format!(
            "Remote document '{}' cannot be loaded",
            uri
        )));
    }
    url.to_file_path()
        .map_err(|()| AppError::Document(format!("Invalid file URI '{}'", uri)))
}

#[derive(Debug, Clone)]
struct Document {
    path: Option<PathBuf>,
    root: Rc<Value>,
}

impl Document {
    fn load(path: &Path) -> AppResult<Self> {
        let path = fs::canonicalize(path).map_err(|e| {
            AppError::Document(format!("Cannot open '{}': {}", path.display(), e))
        })?;
        let text = fs::read_to_string(&path)?;
        Ok(Self {
            root: Rc::new(parse_text(&text)?),
            path: Some(path),
        })
    }

    fn label(&self) -> String {
        self.path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    }
}

struct Resolution {
    max_depth: usize,
    loaded: HashMap<PathBuf, Rc<Value>>,
    chain: Vec<String>,
}

impl Resolution {
    fn value(&mut self, value: &Value, document: &Document, depth: usize) -> AppResult<Value> {
        if depth > MAX_NESTING {
            return Err(AppError::Document(format!(
                "Document nesting exceeds the limit of {} levels",
                MAX_NESTING
            )));
        }
        match value {
            Value::Object(map) => self.object(map, document, depth),
            Value::Array(items) => items
                .iter()
                .map(|item| self.value(item, document, depth + 1))
                .collect::<AppResult<Vec<_>>>()
                .map(Value::Array),
            other => Ok(other.clone()),
        }
    }

    fn object(&mut self, map: &Fragment, document: &Document, depth: usize) -> AppResult<Value> {
        if let Some(reference) = map.get(REF).and_then(Value::as_str) {
            let mut target = self.reference(reference, document, depth)?;
            if let Value::Object(target_map) = &mut target {
                for (key, sibling) in map.iter().filter(|(key, _)| key.as_str() != REF) {
                    target_map.insert(key.clone(), self.value(sibling, document, depth + 1)?);
                }
            }
            return Ok(target);
        }

        let mut resolved = Fragment::new();
        for (key, value) in map {
            let value = if key == "discriminator" {
                self.discriminator(value, document, depth + 1)?
            } else {
                self.value(value, document, depth + 1)?
            };
            resolved.insert(key.clone(), value);
        }
        Ok(Value::Object(resolved))
    }

    fn discriminator(
        &mut self,
        value: &Value,
        document: &Document,
        depth: usize,
    ) -> AppResult<Value> {
        let mut value = value.clone();
        if let Some(Value::Object(mapping)) = value.get_mut("mapping") {
            for target in mapping.values_mut() {
                if let Value::String(name) = target {
                    *target = json!({ REF: mapping_ref(name) });
                }
            }
        }
        self.value(&value, document, depth)
    }

    fn reference(
        &mut self,
        reference: &str,
        document: &Document,
        depth: usize,
    ) -> AppResult<Value> {
        let (target_document, pointer) = match parse_ref(reference) {
            RefTarget::Local(pointer) => (document.clone(), pointer),
            RefTarget::File(path, pointer) => (self.load(document, &path)?, pointer),
            RefTarget::Remote(uri) => {
                return Err(AppError::Document(format!(
                    "Remote reference '{}' cannot be resolved",
                    uri
                )));
            }
        };

        let key = format!("{}#{}", target_document.label(), pointer);
        if let Some(start) = self.chain.iter().position(|seen| *seen == key) {
            let mut cycle = self.chain[start..].to_vec();
            cycle.push(key);
            return Err(AppError::Document(format!(
                "Cyclic reference: {}",
                cycle.join(" -> ")
            )));
        }
        if self.chain.len() >= self.max_depth {
            return Err(AppError::Document(format!(
                "Reference '{}' nested deeper than {} levels",
                reference, self.max_depth
            )));
        }

        let target = lookup(&target_document.root, &pointer)
            .ok_or_else(|| AppError::Document(format!("Unresolvable reference '{}'", reference)))?
            .clone();

        self.chain.push(key);
        let resolved = self.value(&target, &target_document, depth);
        self.chain.pop();
        resolved
    }

    fn load(&mut self, referrer: &Document, relative: &Path) -> AppResult<Document> {
        let base = referrer
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let path = fs::canonicalize(base.join(relative)).map_err(|e| {
            AppError::Document(format!(
                "Cannot open referenced document '{}': {}",
                relative.display(),
                e
            ))
        })?;

        if let Some(root) = self.loaded.get(&path) {
            return Ok(Document {
                path: Some(path),
                root: root.clone(),
            });
        }

        debug!(path = %path.display(), "loading referenced document");
        let document = Document::load(&path)?;
        self.loaded.insert(path, document.root.clone());
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    fn resolve_text(text: &str) -> AppResult<Value> {
        LocalResolver::new().resolve(&DocumentSource::Text(text.to_string()))
    }

    #[test]
    fn test_local_refs_are_inlined() {
        let resolved = resolve_text(
            r#"
openapi: 3.0.0
components:
  schemas:
    Id:
      type: integer
    Pet:
      type: object
      properties:
        id:
          $ref: '#/components/schemas/Id'
"#,
        )
        .unwrap();

        assert_eq!(
            resolved["components"]["schemas"]["Pet"]["properties"]["id"],
            json!({ "type": "integer" })
        );
    }

    #[test]
    fn test_siblings_overlay_target() {
        let resolved = resolve_text(
            r##"{
                "a": { "type": "string", "description": "base" },
                "b": { "$ref": "#/a", "description": "override" }
            }"##,
        )
        .unwrap();
        assert_eq!(
            resolved["b"],
            json!({ "type": "string", "description": "override" })
        );
    }

    #[test]
    fn test_discriminator_mapping_names_are_resolved() {
        let resolved = resolve_text(
            r#"
components:
  schemas:
    Cat:
      type: object
    Dog:
      type: string
    Pet:
      oneOf:
        - $ref: '#/components/schemas/Cat'
      discriminator:
        propertyName: kind
        mapping:
          cat: Cat
          dog: '#/components/schemas/Dog'
"#,
        )
        .unwrap();

        let mapping = &resolved["components"]["schemas"]["Pet"]["discriminator"]["mapping"];
        assert_eq!(mapping["cat"], json!({ "type": "object" }));
        assert_eq!(mapping["dog"], json!({ "type": "string" }));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let err = resolve_text(
            r#"
components:
  schemas:
    Node:
      type: object
      properties:
        next:
          $ref: '#/components/schemas/Node'
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Cyclic reference"), "{err}");
    }

    #[test]
    fn test_remote_ref_is_rejected() {
        let err = resolve_text(r#"{ "a": { "$ref": "https://example.com/schema.json" } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("Remote reference"), "{err}");
    }

    #[test]
    fn test_dangling_ref() {
        let err = resolve_text(r##"{ "a": { "$ref": "#/missing" } }"##).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Document Error: Unresolvable reference '#/missing'"
        );
    }

    #[test]
    fn test_external_file_refs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("common.yaml"),
            "Error:\n  type: object\n  properties:\n    code:\n      $ref: '#/Code'\nCode:\n  type: integer\n",
        )
        .unwrap();
        let main = dir.path().join("openapi.yaml");
        fs::write(
            &main,
            "a:\n  $ref: 'common.yaml#/Error'\nb:\n  $ref: 'common.yaml#/Code'\n",
        )
        .unwrap();

        let resolved = LocalResolver::new()
            .resolve(&DocumentSource::Path(main))
            .unwrap();

        assert_eq!(resolved["a"]["properties"]["code"], json!({ "type": "integer" }));
        assert_eq!(resolved["b"], json!({ "type": "integer" }));
    }

    #[test]
    fn test_file_uri_source() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("openapi.json");
        fs::write(&main, r#"{ "openapi": "3.1.0" }"#).unwrap();
        let uri = Url::from_file_path(&main).unwrap().to_string();

        let source = DocumentSource::from_location(&uri);
        assert!(matches!(source, DocumentSource::Uri(_)));
        let resolved = LocalResolver::new().resolve(&source).unwrap();
        assert_eq!(resolved["openapi"], json!("3.1.0"));
    }

    #[test]
    fn test_missing_file() {
        let err = LocalResolver::new()
            .resolve(&DocumentSource::from_location("does/not/exist.yaml"))
            .unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
    }

    #[test]
    fn test_nesting_limit_across_refs() {
        // Each schema stays shallow on its own; the chain of refs does not.
        let mut schemas = serde_json::Map::new();
        for index in 0..10 {
            let mut schema = if index == 9 {
                json!({ "type": "string" })
            } else {
                json!({ "$ref": format!("#/components/schemas/S{}", index + 1) })
            };
            for _ in 0..60 {
                schema = json!({ "type": "array", "items": schema });
            }
            schemas.insert(format!("S{index}"), schema);
        }
        let text = json!({ "components": { "schemas": schemas } }).to_string();

        let err = resolve_text(&text).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Document Error: Document nesting exceeds the limit of {MAX_NESTING} levels")
        );
    }

    #[test]
    fn test_depth_limit() {
        let err = LocalResolver::new()
            .with_max_depth(1)
            .resolve(&DocumentSource::Text(
                r##"{ "a": { "$ref": "#/b" }, "b": { "$ref": "#/c" }, "c": 1 }"##.into(),
            ))
            .unwrap_err();
        assert!(err.to_string().contains("nested deeper"), "{err}");
    }
}
