// SPDX-License-Identifier: MPL-2.0
//! Loading a navigation forest from TOML.
//!
//! ```toml
//! [[nodes]]
//! id = "ventes"
//! label = "Ventes"
//! icon = "cart"
//!
//! [[nodes.children]]
//! id = "devis"
//! label = "Devis"
//! path = "/devis"
//! ```

use super::resolver::NavigationNode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize, Deserialize)]
struct ForestFile {
    #[serde(default)]
    nodes: Vec<NavigationNode>,
}

/// Parses a navigation forest from a TOML document.
pub fn from_toml_str(content: &str) -> Result<Vec<NavigationNode>> {
    let file: ForestFile =
        toml::from_str(content).map_err(|err| Error::Navigation(err.to_string()))?;
    Ok(file.nodes)
}

/// Reads and parses a navigation forest file.
pub fn load_from_path(path: &Path) -> Result<Vec<NavigationNode>> {
    let content = fs::read_to_string(path)?;
    let nodes = from_toml_str(&content)?;
    tracing::debug!(path = %path.display(), roots = nodes.len(), "navigation forest loaded");
    Ok(nodes)
}

/// Serializes a forest back to TOML.
pub fn to_toml_string(nodes: &[NavigationNode]) -> Result<String> {
    let file = ForestFile {
        nodes: nodes.to_vec(),
    };
    Ok(toml::to_string_pretty(&file)?)
}
