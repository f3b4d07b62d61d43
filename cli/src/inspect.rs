#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints a human readable outline of a parsed document.

use crate::error::CliResult;
use oas_typed_core::oas::enums::Vocabulary;
use oas_typed_core::{parse_with_options, ParserOptions, Specification};
use std::io::Write;
use tracing::debug;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Document path or `file://` URI.
    pub source: String,

    /// Accept unknown formats and media types.
    #[clap(long)]
    pub loose: bool,
}

/// Executes the inspect command, writing the outline to `out`.
pub fn execute(args: &InspectArgs, out: &mut impl Write) -> CliResult<()> {
    debug!(source = %args.source, loose = args.loose, "inspecting document");
    let spec = parse_with_options(&args.source, ParserOptions { strict: !args.loose })?;
    write_outline(&spec, out)?;
    Ok(())
}

fn write_outline(spec: &Specification, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{} {} (OpenAPI {})", spec.info.title, spec.info.version, spec.version)?;

    if !spec.servers.is_empty() {
        writeln!(out, "\nServers:")?;
        for server in &spec.servers {
            writeln!(out, "  {}", server.url)?;
        }
    }

    if !spec.paths.is_empty() {
        writeln!(out, "\nPaths:")?;
        for path in &spec.paths {
            writeln!(out, "  {}", path.url)?;
            for operation in &path.operations {
                let method = operation.method.as_str().to_uppercase();
                match &operation.operation_id {
                    Some(id) => writeln!(out, "    {:<7} {}", method, id)?,
                    None => writeln!(out, "    {}", method)?,
                }
            }
        }
    }

    if !spec.schemas.is_empty() {
        writeln!(out, "\nSchemas:")?;
        for (name, schema) in &spec.schemas {
            writeln!(out, "  {:<24} {}", name, schema.data_type())?;
        }
    }

    if !spec.security_schemas.is_empty() {
        writeln!(out, "\nSecurity schemes:")?;
        for (name, security) in &spec.security_schemas {
            writeln!(out, "  {:<24} {}", name, security.security_type)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DOCUMENT: &str = r#"
openapi: 3.0.0
info:
  title: Pets
  version: "1.0"
servers:
  - url: https://api.example.com
paths:
  /pets:
    get:
      operationId: listPets
      responses:
        '200':
          description: ok
components:
  schemas:
    Pet:
      type: object
"#;

    #[test]
    fn test_outline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        fs::write(&path, DOCUMENT).unwrap();

        let args = InspectArgs {
            source: path.to_string_lossy().into_owned(),
            loose: false,
        };
        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Pets 1.0 (OpenAPI 3.0.0)"));
        assert!(text.contains("https://api.example.com"));
        assert!(text.contains("GET     listPets"));
        assert!(text.contains("Pet"));
        assert!(text.contains("object"));
    }

    #[test]
    fn test_missing_document_fails() {
        let args = InspectArgs {
            source: "no/such/openapi.yaml".into(),
            loose: false,
        };
        assert!(execute(&args, &mut Vec::new()).is_err());
    }
}
