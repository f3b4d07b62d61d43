#![deny(missing_docs)]

//! # Dump Command
//!
//! Serializes the typed graph of a document.

use crate::error::CliResult;
use oas_typed_core::{parse_with_options, ParserOptions};
use std::io::Write;
use tracing::debug;

/// Output encodings.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the dump command.
#[derive(clap::Args, Debug, Clone)]
pub struct DumpArgs {
    /// Document path or `file://` URI.
    pub source: String,

    /// Accept unknown formats and media types.
    #[clap(long)]
    pub loose: bool,

    /// Output encoding.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

/// Executes the dump command, writing the typed graph to `out`.
pub fn execute(args: &DumpArgs, out: &mut impl Write) -> CliResult<()> {
    debug!(source = %args.source, loose = args.loose, "dumping document");
    let spec = parse_with_options(&args.source, ParserOptions { strict: !args.loose })?;
    match args.output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &spec)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &spec)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_dump_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.json");
        fs::write(
            &path,
            r#"{
                "openapi": "3.1.0",
                "info": { "title": "Dump", "version": "1" },
                "components": { "schemas": { "Id": { "type": ["integer", "null"] } } }
            }"#,
        )
        .unwrap();

        let args = DumpArgs {
            source: path.to_string_lossy().into_owned(),
            loose: false,
            output: OutputFormat::Json,
        };
        let mut out = Vec::new();
        execute(&args, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["info"]["title"], "Dump");
        assert_eq!(value["schemas"]["Id"]["type"], "integer");
        assert_eq!(value["schemas"]["Id"]["nullable"], true);
    }
}
