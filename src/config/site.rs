//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Directory
    /// Directory holding the posts, relative to the base directory
    pub posts_dir: String,

    // Writing
    /// Filename pattern used by `postroll new`
    pub new_post_name: String,
    /// Layout applied to posts whose front matter has no `layout` key
    pub default_layout: String,

    // Date format (Moment.js tokens)
    pub date_format: String,

    // Loading
    /// Parse documents on the rayon thread pool
    pub parallel: bool,

    /// Unknown keys, kept so a renderer sharing this file can read them
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            posts_dir: "_posts".to_string(),

            new_post_name: ":year-:i_month-:day-:title.md".to_string(),
            default_layout: "post".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            parallel: false,
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}
