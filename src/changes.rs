//! Link change records and loading them from the rewriting stage's output

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One link in one file rewritten from an old value to a new value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkChange {
    pub file: String,
    pub old_link: String,
    pub new_link: String,
}

impl LinkChange {
    pub fn new(
        file: impl Into<String>,
        old_link: impl Into<String>,
        new_link: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            old_link: old_link.into(),
            new_link: new_link.into(),
        }
    }
}

/// Load the ordered change list from a JSON or YAML file
///
/// `.yaml` and `.yml` files are read as YAML, everything else as JSON. The
/// document must be a sequence of `{file, oldLink, newLink}` records; their
/// order is kept as written.
pub fn load_changes(path: impl AsRef<Path>) -> Result<Vec<LinkChange>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read change list {}", path.display()))?;

    let changes = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML change list {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON change list {}", path.display()))?
    };

    Ok(changes)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    )
}
