use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::bundle::Bundle;

/// What `save` did with the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    Created,
    Overwritten,
    Unchanged,
}

impl WriteAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteAction::Created => "created",
            WriteAction::Overwritten => "overwritten",
            WriteAction::Unchanged => "unchanged",
        }
    }
}

/// Writer for a single ARB file.
pub struct BundleWriter {
    file_path: PathBuf,
}

impl BundleWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            file_path: path.to_path_buf(),
        }
    }

    /// Action `save` would take for this bundle, without touching the disk.
    pub fn plan(&self, bundle: &Bundle) -> Result<WriteAction> {
        let content = bundle.to_pretty_json()?;
        Ok(self.action_for(&content))
    }

    /// Save the bundle with pretty formatting, creating parent directories.
    ///
    /// The file is rewritten even when unchanged, so its mtime always
    /// reflects the last run.
    pub fn save(&self, bundle: &Bundle) -> Result<WriteAction> {
        let content = bundle.to_pretty_json()?;
        let action = self.action_for(&content);

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(action)
    }

    fn action_for(&self, content: &str) -> WriteAction {
        match fs::read_to_string(&self.file_path) {
            Ok(existing) if existing == content => WriteAction::Unchanged,
            Ok(_) => WriteAction::Overwritten,
            Err(_) if self.file_path.exists() => WriteAction::Overwritten,
            Err(_) => WriteAction::Created,
        }
    }
}
