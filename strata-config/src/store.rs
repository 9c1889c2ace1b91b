//! Loading and saving `strata.json` at a project root.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::{Config, Error, Result};

/// Default configuration file name.
pub const FILE_NAME: &str = "strata.json";

/// Reads and writes the configuration file below an explicit project root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    file_name: String,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::with_file_name(FILE_NAME)
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }

    pub fn exists(&self, root: &Path) -> bool {
        self.path(root).is_file()
    }

    /// Best-effort load: a missing or corrupt file yields `None`.
    pub fn load(&self, root: &Path) -> Option<Config> {
        if !self.exists(root) {
            return None;
        }
        match self.read(root) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(
                    "ignoring unreadable {}: {}",
                    self.path(root).display(),
                    err
                );
                None
            }
        }
    }

    /// Strict load with source-annotated diagnostics.
    pub fn read(&self, root: &Path) -> Result<Config> {
        let path = self.path(root);
        let content = read_source(&path)?;
        Config::from_json_with_filename(&content, &path.display().to_string())
    }

    /// Strict load plus every problem in the file: invariant violations
    /// and enum values that parsing replaced with defaults.
    pub fn check(&self, root: &Path) -> Result<(Config, Vec<String>)> {
        let path = self.path(root);
        let content = read_source(&path)?;
        let config = Config::from_json_with_filename(&content, &path.display().to_string())?;
        let mut errors = Config::lint_json(&content);
        errors.extend(config.validate());
        Ok((config, errors))
    }

    /// Write the configuration through a temporary sibling and rename it
    /// into place, so readers never see a half-written file.
    pub fn save(&self, root: &Path, config: &Config) -> Result<PathBuf> {
        let path = self.path(root);
        let tmp = root.join(format!(".{}.tmp", self.file_name));
        let mut content = config.to_json()?;
        content.push('\n');

        let write_err = |source| {
            Box::new(Error::Write {
                path: path.clone(),
                source,
            })
        };
        std::fs::write(&tmp, content).map_err(write_err)?;
        std::fs::rename(&tmp, &path).map_err(write_err)?;

        debug!("saved configuration to {}", path.display());
        Ok(path)
    }

    /// Walk from `start` up to the filesystem root looking for the
    /// configuration file.
    pub fn find_project_root(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.exists(dir))
            .map(Path::to_path_buf)
    }
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}
