//! Workspace store configuration

use std::env;
use std::path::PathBuf;

/// Configuration for the workspace store
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Directory holding the JSON slot files
    pub data_dir: PathBuf,
}

impl WorkspaceConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let data_dir = env::var("SEODESK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".seodesk"));

        Self { data_dir }
    }

    /// Create configuration with an explicit data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
