//! Static asset configuration from TOML (`[assets]` section)

use serde::{Deserialize, Serialize};

/// Raw asset configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssetsConfig {
    /// Prefix for image URLs when the exam is hosted under a sub-path
    /// (e.g. `/philnits-mock`). Empty means site root.
    pub base_path: String,
}
