#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **attributes**: Typed field extraction shared by every builder.
//! - **enums**: Closed vocabularies and the `Loose` wrapper.
//! - **schemas**: Schema model, `allOf` merging and the schema factory.
//! - **models**: Everything in a document besides schemas.
//! - **builders**: One builder per document section.
//! - **resolver**: Loads documents and inlines `$ref`s.
//! - **document**: The parser wiring it all together.

pub mod attributes;
pub mod builders;
pub mod document;
pub mod enums;
mod media_types;
pub mod models;
pub(crate) mod ref_utils;
pub mod resolver;
pub mod schemas;

pub use document::{parse, parse_source, parse_str, parse_with_options, Parser, ParserOptions};
pub use enums::Loose;
pub use models::Specification;
pub use resolver::{DocumentResolver, DocumentSource, LocalResolver};
pub use schemas::{Schema, SchemaFactory};
