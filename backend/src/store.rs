use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use common::Forest;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("stored document is not a valid forest: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("top-level document must be a sequence")]
    InvalidFormat,
}

/// Durable storage for exactly one forest document at a fixed path.
///
/// There is no in-memory cache; every call round-trips to disk. The file is
/// assumed single-writer, so concurrent saves are last-writer-wins.
pub struct SnippetStore {
    path: PathBuf,
}

impl SnippetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored forest. A missing file is an empty forest; a file
    /// that fails to parse is an error, never silently empty.
    pub fn load(&self) -> Result<Forest, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Replaces the stored document after checking the top level is a
    /// sequence. On `InvalidFormat` the prior file is untouched.
    pub fn save(&self, doc: &Value) -> Result<(), StoreError> {
        if !doc.is_array() {
            return Err(StoreError::InvalidFormat);
        }
        self.overwrite(doc)
    }

    /// Replaces the stored document unconditionally. Used by the delete path,
    /// where the caller has already computed the replacement forest.
    pub fn overwrite(&self, doc: &Value) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(doc)?)?;
        Ok(())
    }
}
