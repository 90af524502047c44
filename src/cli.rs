// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use linippet::config::DATA_ENV;

/// linippet - one-line shell snippet store
///
/// Save command lines, pick one with fuzzy search, fill in its
/// `${{name}}` placeholders and print it for your shell to run.
#[derive(Parser, Debug)]
#[command(name = "linippet")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  linippet add 'docker run -d -p ${{port:8080}}:80 ${{image}}'\n  linippet pick docker\n  eval \"$(linippet init bash)\""
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Snippet file (defaults to ~/.linippet/linippet.json)
    #[arg(long, global = true, env = DATA_ENV, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Shells with an init script
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InitShell {
    Bash,
    Zsh,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a snippet, fill its placeholders and print it (default)
    #[command(
        visible_aliases = ["p"],
        after_help = "Examples:\n  linippet pick\n  linippet pick \"git br\" --first\n  linippet pick docker --first --arg port=8080 --arg image=nginx"
    )]
    Pick {
        /// Initial query
        query: Option<String>,

        /// Take the best match without opening the picker
        #[arg(short, long)]
        first: bool,

        /// Placeholder value (repeatable)
        #[arg(short, long = "arg", value_name = "NAME=VALUE", value_parser = parse_key_val)]
        args: Vec<(String, String)>,
    },

    /// Print ranked matches for a query
    #[command(visible_aliases = ["s", "find"])]
    Search {
        /// Search terms; every whitespace-separated term must match
        query: String,

        /// Maximum number of results
        #[arg(
            short = 'm',
            long = "limit",
            visible_alias = "max-results",
            value_parser = parse_limit
        )]
        limit: Option<usize>,
    },

    /// Save a new snippet
    #[command(visible_aliases = ["a", "create"])]
    Add {
        /// Command line to save (prompted when omitted)
        snippet: Option<String>,
    },

    /// Change a stored snippet
    #[command(visible_aliases = ["e"])]
    Edit {
        /// Snippet id or unique id prefix (picked interactively when omitted)
        id: Option<String>,

        /// Replacement text (prompted when omitted)
        snippet: Option<String>,
    },

    /// Delete a stored snippet
    #[command(visible_aliases = ["rm"])]
    Remove {
        /// Snippet id or unique id prefix (picked interactively when omitted)
        id: Option<String>,
    },

    /// List stored snippets
    #[command(visible_aliases = ["ls"])]
    List,

    /// Print the shell integration script
    Init {
        #[arg(value_enum)]
        shell: InitShell,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("empty placeholder name in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}
