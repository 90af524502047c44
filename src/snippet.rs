// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON-file snippet store
//!
//! The store file is a JSON array of `{"id", "snippet"}` objects. It is read
//! whole, edited in memory and replaced whole on every write.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::StoreError;

/// One stored command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub snippet: String,
}

/// Handle to the snippet file on disk
#[derive(Debug, Clone)]
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

    /// Load every snippet. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Snippet>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "snippet file missing, starting empty"
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let snippets: Vec<Snippet> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), count = snippets.len(), "loaded snippets");
        Ok(snippets)
    }

    /// Append a new snippet with a fresh id.
    pub fn add(&self, text: &str) -> Result<Snippet, StoreError> {
        let text = normalize(text)?;
        let mut snippets = self.load()?;
        let snippet = Snippet {
            id: uuid::Uuid::new_v4().to_string(),
            snippet: text,
        };
        snippets.push(snippet.clone());
        self.save(&snippets)?;
        tracing::info!(id = %snippet.id, "added snippet");
        Ok(snippet)
    }

    /// Replace the text of the snippet addressed by `id` (or a unique prefix).
    pub fn update(&self, id: &str, text: &str) -> Result<Snippet, StoreError> {
        let text = normalize(text)?;
        let mut snippets = self.load()?;
        let index = find_index(&snippets, id)?;
        snippets[index].snippet = text;
        self.save(&snippets)?;
        tracing::info!(id = %snippets[index].id, "updated snippet");
        Ok(snippets[index].clone())
    }

    /// Delete the snippet addressed by `id` (or a unique prefix).
    pub fn remove(&self, id: &str) -> Result<Snippet, StoreError> {
        let mut snippets = self.load()?;
        let index = find_index(&snippets, id)?;
        let removed = snippets.remove(index);
        self.save(&snippets)?;
        tracing::info!(id = %removed.id, "removed snippet");
        Ok(removed)
    }

    /// Look up one snippet by id or unique id prefix.
    pub fn resolve(&self, id: &str) -> Result<Snippet, StoreError> {
        let snippets = self.load()?;
        let index = find_index(&snippets, id)?;
        Ok(snippets[index].clone())
    }

    fn save(&self, snippets: &[Snippet]) -> Result<(), StoreError> {
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let out = serde_json::to_vec(snippets).map_err(io::Error::from).map_err(write_err)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).map_err(write_err)?;
        file.write_all(&out).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

fn normalize(text: &str) -> Result<String, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(StoreError::BlankSnippet);
    }
    if text.contains(['\n', '\r']) {
        return Err(StoreError::MultiLine);
    }
    Ok(text.to_string())
}

fn find_index(snippets: &[Snippet], id: &str) -> Result<usize, StoreError> {
    if let Some(index) = snippets.iter().position(|s| s.id == id) {
        return Ok(index);
    }
    if id.is_empty() {
        return Err(StoreError::NotFound { id: id.to_string() });
    }

    let mut matches = snippets
        .iter()
        .enumerate()
        .filter(|(_, s)| s.id.starts_with(id))
        .map(|(i, _)| i);
    match (matches.next(), matches.count()) {
        (Some(index), 0) => Ok(index),
        (Some(_), rest) => Err(StoreError::AmbiguousId {
            prefix: id.to_string(),
            count: rest + 1,
        }),
        (None, _) => Err(StoreError::NotFound { id: id.to_string() }),
    }
}
