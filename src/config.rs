use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Parsed page configuration. Read-only input to the pipeline once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Default input PDF, relative to the project root unless absolute.
    #[serde(default)]
    pub file: Option<String>,

    /// Default output PDF, relative to the project root unless absolute.
    #[serde(default)]
    pub output: Option<String>,

    /// Default cover Markdown, relative to the config file's own directory.
    #[serde(default, rename = "appendFirstPage")]
    pub append_first_page: Option<String>,

    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// One requested page as declared by the configuration author. The three
/// index fields are legacy synonyms; see [`crate::pages::select_pages`] for
/// which ones are consulted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageEntry {
    /// Descriptive label, not used by selection.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "pageIndex")]
    pub page_index: Option<u32>,

    #[serde(default)]
    pub page: Option<u32>,

    /// Accepted by the schema for compatibility; never consulted.
    #[serde(default, rename = "pageNumber")]
    pub page_number: Option<u32>,
}

pub fn load(path: &Path) -> anyhow::Result<DocumentConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_yaml::from_str(&contents).with_context(|| format!("parse config: {}", path.display()))
}
