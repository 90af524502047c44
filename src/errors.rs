// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! Provides user-friendly error messages with actionable suggestions.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reading, writing or addressing the snippet store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read snippet file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Snippet file '{}' is not valid JSON: {source}\n\n\
         Suggestion: fix or move the file aside; linippet expects an array of {{\"id\", \"snippet\"}} objects.",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write snippet file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Snippet id '{id}' is not found\n\n\
         Suggestion: run 'linippet list' to see stored ids."
    )]
    NotFound { id: String },

    #[error(
        "Snippet id prefix '{prefix}' matches {count} snippets\n\n\
         Suggestion: type more characters of the id."
    )]
    AmbiguousId { prefix: String, count: usize },

    #[error("Cannot save blank snippet")]
    BlankSnippet,

    #[error("Snippets must be a single line")]
    MultiLine,
}

/// Error indicating the store holds nothing to pick from
#[derive(Debug)]
pub struct NoSnippetsError {
    pub data_path: String,
}

impl fmt::Display for NoSnippetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are no snippets in '{}'\n\n\
             Suggestion: save one first.\n\
             Example: linippet add \"git log --oneline -n ${{{{count:10}}}}\"",
            self.data_path
        )
    }
}

impl std::error::Error for NoSnippetsError {}

/// Error indicating no snippet matched the query
#[derive(Debug)]
pub struct NoMatchError {
    pub query: String,
}

impl fmt::Display for NoMatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No snippet matches '{}'\n\n\
             Suggestions:\n\
             - Use fewer or shorter words; every word must match\n\
             - Run 'linippet list' to see what is stored",
            self.query
        )
    }
}

impl std::error::Error for NoMatchError {}
