// SPDX-License-Identifier: MIT OR Apache-2.0

//! linippet - one-line shell snippet store with fuzzy picking
//!
//! Snippets live in a single JSON file. `pick` ranks them against the
//! query, fills `${{name}}` placeholders and prints the chosen line.

mod cli;
mod commands;
mod picker;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, OutputFormat};
use commands::Context;
use linippet::config::{Config, ConfigOutputFormat};
use linippet::snippet::SnippetStore;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load();
    let format = cli
        .format
        .or_else(|| {
            config.output_format().map(|f| match f {
                ConfigOutputFormat::Text => OutputFormat::Text,
                ConfigOutputFormat::Json => OutputFormat::Json,
            })
        })
        .unwrap_or(OutputFormat::Text);
    let store = SnippetStore::new(config.data_path(cli.data.as_deref()));
    tracing::debug!(path = %store.path().display(), "using snippet file");

    let ctx = Context {
        store,
        config,
        format,
        compact: cli.compact,
    };

    match cli.command {
        None => commands::pick::run(&ctx, None, false, &[])?,
        Some(Commands::Pick { query, first, args }) => {
            commands::pick::run(&ctx, query.as_deref(), first, &args)?;
        }
        Some(Commands::Search { query, limit }) => {
            commands::search::run(&ctx, &query, limit)?;
        }
        Some(Commands::Add { snippet }) => {
            commands::add::run(&ctx, snippet.as_deref())?;
        }
        Some(Commands::Edit { id, snippet }) => {
            commands::edit::run(&ctx, id.as_deref(), snippet.as_deref())?;
        }
        Some(Commands::Remove { id }) => {
            commands::remove::run(&ctx, id.as_deref())?;
        }
        Some(Commands::List) => commands::list::run(&ctx)?,
        Some(Commands::Init { shell }) => commands::init::run(shell)?,
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "linippet", &mut io::stdout());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean for the picked line. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
