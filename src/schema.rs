//! API definition model and loader.
//! The definition is a JSON document mapping group names to ordered lists of endpoints.

use crate::error::{Error, Result};
use crate::naming;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One routable operation of the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    /// Route path relative to the group, starting with `/`.
    pub path: String,
    /// HTTP verb, used verbatim as the prefix of derived names.
    pub method: String,
    /// Optional explicit name used by templates instead of the derived one.
    #[serde(default)]
    pub func_name: Option<String>,
    /// Shape of the request body.
    #[serde(default)]
    pub request: IndexMap<String, serde_json::Value>,
    /// Shape of the response body.
    #[serde(default)]
    pub response: IndexMap<String, serde_json::Value>,
}

impl Endpoint {
    /// Derives the callable name of this endpoint from its method and path.
    pub fn func_name(&self) -> Result<String> {
        naming::func_name(&self.method, &self.path)
    }
}

/// Full API schema: endpoint groups keyed by name, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDefinition(IndexMap<String, Vec<Endpoint>>);

impl ApiDefinition {
    /// Returns the endpoints of `group`, if it exists.
    pub fn group(&self, group: &str) -> Option<&[Endpoint]> {
        self.0.get(group).map(Vec::as_slice)
    }

    /// Iterates groups in document order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Endpoint])> {
        self.0.iter().map(|(name, endpoints)| (name.as_str(), endpoints.as_slice()))
    }

    /// Total number of endpoints across all groups.
    pub fn endpoint_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Decodes an API definition from JSON text.
///
/// # Arguments
/// * `content` - Raw JSON document
/// * `origin` - Path reported in errors
///
/// # Errors
/// * `Error::DecodeError` if the text is not JSON or has the wrong shape
pub fn parse_api_definition<P: AsRef<Path>>(content: &str, origin: P) -> Result<ApiDefinition> {
    serde_json::from_str(content)
        .map_err(|source| Error::DecodeError { path: origin.as_ref().to_path_buf(), source })
}

/// Reads and decodes the API definition at `path`.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::DecodeError` if the content is not a valid definition
pub fn load_api_definition<P: AsRef<Path>>(path: P) -> Result<ApiDefinition> {
    let path = path.as_ref();
    debug!("Loading API definition from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let api = parse_api_definition(&content, path)?;

    debug!(
        "Loaded {} groups with {} endpoints",
        api.groups().count(),
        api.endpoint_count()
    );
    Ok(api)
}
