use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{IconError, Result};

/// Export settings, optionally stored as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the single-frame PNG is written.
    pub png_path: PathBuf,
    /// Where the multi-resolution ICO is written.
    pub ico_path: PathBuf,
    /// Pixel size of the PNG.
    pub png_size: u32,
    /// Frame sizes embedded in the ICO.
    pub ico_sizes: Vec<u32>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            png_path: PathBuf::from("src/app.png"),
            ico_path: PathBuf::from("src/app.ico"),
            png_size: 48,
            ico_sizes: vec![16, 24, 32, 48, 256],
        }
    }
}

impl ExportConfig {
    /// Load config from a TOML file. Keys that are absent keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        let config = toml::from_str(&contents).map_err(|source| IconError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve both output paths against `root` (relative paths only).
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.png_path.is_relative() {
            self.png_path = root.join(&self.png_path);
        }
        if self.ico_path.is_relative() {
            self.ico_path = root.join(&self.ico_path);
        }
        self
    }
}
