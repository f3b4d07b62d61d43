//! Builds the `servers` list.

use crate::error::AppResult;
use crate::oas::attributes::{as_fragment, Attributes};
use crate::oas::builders::build_each;
use crate::oas::models::{Server, ServerVariable};
use indexmap::IndexMap;
use serde_json::Value;

/// Builder for [`Server`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerBuilder;

impl ServerBuilder {
    /// Builds one server. `url` is required.
    pub fn build(&self, data: &Value) -> AppResult<Server> {
        let attrs = Attributes::new(as_fragment(data, "servers")?, "server");
        let variables = match attrs.mapping("variables")? {
            Some(variables) => variables
                .iter()
                .map(|(name, variable)| Ok((name.clone(), self.variable(variable)?)))
                .collect::<AppResult<IndexMap<_, _>>>()?,
            None => IndexMap::new(),
        };
        Ok(Server {
            url: attrs.required("url")?,
            description: attrs.optional("description")?,
            variables,
            extensions: attrs.extensions(),
        })
    }

    /// Builds a list of servers, keeping order.
    pub fn build_list(&self, data: &Value) -> AppResult<Vec<Server>> {
        build_each(data, "servers", |server| self.build(server))
    }

    fn variable(&self, data: &Value) -> AppResult<ServerVariable> {
        let attrs = Attributes::new(as_fragment(data, "variables")?, "server variable");
        Ok(ServerVariable {
            default: attrs.required("default")?,
            enum_values: attrs.optional("enum")?.unwrap_or_default(),
            description: attrs.optional("description")?,
            extensions: attrs.extensions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_list() {
        let servers = ServerBuilder
            .build_list(&json!([
                { "url": "https://development.gigantic-server.com/v1", "description": "Development server" },
                { "url": "https://api.gigantic-server.com/v1", "x-region": "eu" },
            ]))
            .unwrap();

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].description.as_deref(), Some("Development server"));
        assert!(servers[0].variables.is_empty());
        assert_eq!(servers[1].extensions["region"], json!("eu"));
    }

    #[test]
    fn test_variables() {
        let server = ServerBuilder
            .build(&json!({
                "url": "https://{username}.example.com:{port}/v2",
                "variables": {
                    "username": { "default": "demo", "description": "Assigned user" },
                    "port": { "enum": ["8443", "443"], "default": "8443" },
                },
            }))
            .unwrap();

        let names: Vec<_> = server.variables.keys().map(String::as_str).collect();
        assert_eq!(names, ["username", "port"]);
        assert_eq!(server.variables["port"].enum_values, ["8443", "443"]);
    }

    #[test]
    fn test_variable_requires_default() {
        let err = ServerBuilder
            .build(&json!({ "url": "https://{host}", "variables": { "host": {} } }))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required field 'default' in server variable"
        );
    }
}
