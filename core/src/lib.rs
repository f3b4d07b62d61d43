#![deny(missing_docs)]

//! # OAS Typed Core
//!
//! Converts OpenAPI documents (YAML or JSON) into a strongly typed
//! [`Specification`], including fully built schema trees.

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) parsing.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    parse, parse_source, parse_str, parse_with_options, DocumentResolver, DocumentSource,
    LocalResolver, Loose, Parser, ParserOptions, Schema, SchemaFactory, Specification,
};
