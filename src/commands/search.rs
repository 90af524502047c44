// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ranked search command

use anyhow::Result;
use colored::Colorize;

use super::{short_id, Context};
use crate::cli::OutputFormat;
use linippet::fuzzy::{search, CancelToken};
use linippet::output::{highlight, print_json, use_colors};

/// Run the search command
pub fn run(ctx: &Context, query: &str, limit: Option<usize>) -> Result<()> {
    let snippets = ctx.store.load()?;
    let limit = ctx.config.merge_max_results(limit);

    let mut results = search(&CancelToken::new(), query, &snippets).unwrap_or_default();
    results.truncate(limit);

    match ctx.format {
        OutputFormat::Json => print_json(&results, ctx.compact)?,
        OutputFormat::Text => {
            if results.is_empty() {
                println!("{} No snippets found matching: {}", "✗".red(), query.yellow());
                return Ok(());
            }
            let use_color = use_colors();
            for result in &results {
                let id = short_id(&result.snippet.id);
                let line = highlight(&result.snippet.snippet, &result.positions, use_color);
                if use_color {
                    println!("{:>5}  {}  {}", result.score, id.dimmed(), line);
                } else {
                    println!("{:>5}  {}  {}", result.score, id, line);
                }
            }
        }
    }
    Ok(())
}
