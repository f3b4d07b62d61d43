#![deny(missing_docs)]

//! # Section Builders
//!
//! One builder per document section. Builders are small `Copy` values that
//! hold the builders they delegate to, so the whole graph is wired once by
//! [`crate::oas::document::Parser`] and then only read.
//!
//! Every builder reads its fields through [`crate::oas::attributes::Attributes`]
//! and hands embedded schemas to the [`crate::oas::schemas::SchemaFactory`].

pub mod content;
pub mod external_doc;
pub mod header;
pub mod info;
pub mod oauth_flow;
pub mod operation;
pub mod parameter;
pub mod path;
pub mod request;
pub mod response;
pub mod schemas;
pub mod security;
pub mod server;
pub mod tag;

pub use content::ContentBuilder;
pub use external_doc::ExternalDocBuilder;
pub use header::HeaderBuilder;
pub use info::InfoBuilder;
pub use oauth_flow::OAuthFlowBuilder;
pub use operation::OperationBuilder;
pub use parameter::ParameterBuilder;
pub use path::PathBuilder;
pub use request::RequestBuilder;
pub use response::ResponseBuilder;
pub use schemas::SchemasBuilder;
pub use security::SecurityBuilder;
pub use server::ServerBuilder;
pub use tag::TagBuilder;

use crate::error::{AppError, AppResult};
use serde_json::Value;

/// Builds every item of a list-valued section.
pub(crate) fn build_each<T>(
    data: &Value,
    context: &str,
    build: impl Fn(&Value) -> AppResult<T>,
) -> AppResult<Vec<T>> {
    data.as_array()
        .ok_or_else(|| AppError::invalid(context, data, "list"))?
        .iter()
        .map(build)
        .collect()
}
