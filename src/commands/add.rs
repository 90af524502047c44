// SPDX-License-Identifier: MIT OR Apache-2.0

//! Save a new snippet

use anyhow::Result;
use colored::Colorize;

use super::{prompt_line, short_id, Context};
use crate::cli::OutputFormat;
use linippet::output::print_json;
use linippet::template::extract_args;

/// Run the add command
pub fn run(ctx: &Context, snippet: Option<&str>) -> Result<()> {
    let text = match snippet {
        Some(text) => text.to_string(),
        None => prompt_line("What is CommandLine?: ")?.unwrap_or_default(),
    };
    let saved = ctx.store.add(&text)?;

    match ctx.format {
        OutputFormat::Json => print_json(&saved, ctx.compact)?,
        OutputFormat::Text => {
            println!("{} Saved snippet {}", "✓".green(), short_id(&saved.id).cyan());
            let args = extract_args(&saved.snippet);
            if !args.is_empty() {
                let names: Vec<&str> = args.iter().map(|a| a.name.as_str()).collect();
                println!("  placeholders: {}", names.join(", "));
            }
        }
    }
    Ok(())
}
