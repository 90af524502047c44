// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations

pub mod add;
pub mod edit;
pub mod init;
pub mod list;
pub mod pick;
pub mod remove;
pub mod search;

use anyhow::{Context as _, Result};
use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli::OutputFormat;
use linippet::config::Config;
use linippet::errors::NoSnippetsError;
use linippet::snippet::{Snippet, SnippetStore};

/// Everything a subcommand needs from the global flags and config
pub struct Context {
    pub store: SnippetStore,
    pub config: Config,
    pub format: OutputFormat,
    pub compact: bool,
}

impl Context {
    /// Load the store, failing with a suggestion when it is empty
    pub fn load_nonempty(&self) -> Result<Vec<Snippet>> {
        let snippets = self.store.load()?;
        if snippets.is_empty() {
            return Err(NoSnippetsError {
                data_path: self.store.path().display().to_string(),
            }
            .into());
        }
        Ok(snippets)
    }
}

/// Whether the picker can take over the terminal
pub fn interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Ask on stderr, read one line from stdin. `None` on EOF.
pub fn prompt_line(label: &str) -> Result<Option<String>> {
    ask(label, &mut io::stdin().lock(), &mut io::stderr())
}

/// Write `label` to `out` and read one line from `input`. `None` on EOF.
pub fn ask(
    label: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Short form of an id for display
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
