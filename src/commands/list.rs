// SPDX-License-Identifier: MIT OR Apache-2.0

//! List stored snippets

use anyhow::Result;
use colored::Colorize;

use super::{short_id, Context};
use crate::cli::OutputFormat;
use linippet::output::{print_json, use_colors};

/// Run the list command
pub fn run(ctx: &Context) -> Result<()> {
    let snippets = ctx.load_nonempty()?;

    match ctx.format {
        OutputFormat::Json => print_json(&snippets, ctx.compact)?,
        OutputFormat::Text => {
            let use_color = use_colors();
            for snippet in &snippets {
                let id = short_id(&snippet.id);
                if use_color {
                    println!("{}  {}", id.cyan(), snippet.snippet);
                } else {
                    println!("{}  {}", id, snippet.snippet);
                }
            }
        }
    }
    Ok(())
}
