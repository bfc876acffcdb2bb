//! TOML configuration: logging level and the stored-file library.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::request::{FileType, StoredFile};

const DEFAULT_SAMPLE_CHARS: usize = 5000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub library: LibraryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Characters read from the start of a text file before analysis.
    pub sample_chars: usize,
    pub files: Vec<FileEntry>,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            sample_chars: DEFAULT_SAMPLE_CHARS,
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub id: i64,
    pub owner: i64,
    pub title: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

impl From<FileEntry> for StoredFile {
    fn from(entry: FileEntry) -> Self {
        Self {
            id: entry.id,
            owner: entry.owner,
            title: entry.title,
            path: entry.path,
            file_type: entry.file_type,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. Relative file paths are left as-is.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. Relative library paths resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut config = Self::from_toml(&contents)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in &mut config.library.files {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }

        debug!(
            path = %path.display(),
            files = config.library.files.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.library.sample_chars == 0 {
            return Err(Error::Config(
                "library.sample_chars must be greater than zero".to_string(),
            ));
        }
        let mut seen = std::collections::HashSet::new();
        for entry in &self.library.files {
            if !seen.insert(entry.id) {
                return Err(Error::Config(format!(
                    "duplicate library file id {}",
                    entry.id
                )));
            }
        }
        Ok(())
    }
}
