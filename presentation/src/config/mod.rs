//! Presentation-level configuration
//!
//! Configuration for asset URLs and console display.

use mock_exam_domain::asset_path;
use serde::{Deserialize, Serialize};

/// Where static assets (question images) are served from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Base path prefix, e.g. `/philnits-mock`; empty for site root
    pub base_path: String,
}

impl AssetConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Public URL of an asset referenced by a question
    pub fn url(&self, path: &str) -> String {
        // Absolute URLs are left alone.
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        asset_path(&self.base_path, path)
    }
}

/// Console display options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Mark the correct choice and show explanations
    pub reveal_answers: bool,
    /// Score (in percent) needed to pass
    pub pass_percent: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            reveal_answers: false,
            pass_percent: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_with_base() {
        let assets = AssetConfig::new("/philnits-mock/");
        assert_eq!(assets.url("/img/q1.png"), "/philnits-mock/img/q1.png");
    }

    #[test]
    fn test_asset_url_root() {
        assert_eq!(AssetConfig::default().url("img/q1.png"), "/img/q1.png");
    }

    #[test]
    fn test_asset_url_absolute_untouched() {
        let assets = AssetConfig::new("/philnits-mock");
        assert_eq!(
            assets.url("https://example.com/q1.png"),
            "https://example.com/q1.png"
        );
    }
}
