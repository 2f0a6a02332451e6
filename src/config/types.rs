use reelscan_parser::ScannerConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    /// Keyword tables and toggles for the filename scanner. Any table left
    /// out of the file keeps its built-in default.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Root directories scanned by the `scan` command when no path is given.
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Follow symbolic links while walking.
    #[serde(default)]
    pub follow_links: bool,

    /// Maximum walk depth; unlimited when unset.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Skip dot-files and dot-directories (default: true).
    #[serde(default = "default_skip_hidden")]
    pub skip_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            follow_links: false,
            max_depth: None,
            skip_hidden: default_skip_hidden(),
        }
    }
}

fn default_skip_hidden() -> bool {
    true
}
