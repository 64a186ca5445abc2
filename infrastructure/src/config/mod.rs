//! Configuration file loading for mock-exam
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `MOCK_EXAM_<SECTION>__<KEY>` (e.g. `MOCK_EXAM_ASSETS__BASE_PATH`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./mock-exam.toml` or `./.mock-exam.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mock-exam/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAssetsConfig, FileConfig, FileExamConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
