// SPDX-License-Identifier: MIT OR Apache-2.0

//! Change the text of a stored snippet

use anyhow::Result;
use colored::Colorize;

use super::{interactive, prompt_line, short_id, Context};
use crate::cli::OutputFormat;
use crate::picker;
use linippet::output::print_json;
use linippet::snippet::Snippet;

/// Run the edit command
pub fn run(ctx: &Context, id: Option<&str>, snippet: Option<&str>) -> Result<()> {
    let Some(target) = select_target(ctx, id)? else {
        return Ok(());
    };

    let text = match snippet {
        Some(text) => text.to_string(),
        None => {
            eprintln!("current: {}", target.snippet);
            prompt_line("new: ")?.unwrap_or_default()
        }
    };
    let updated = ctx.store.update(&target.id, &text)?;

    match ctx.format {
        OutputFormat::Json => print_json(&updated, ctx.compact)?,
        OutputFormat::Text => {
            println!("{} Updated snippet {}", "✓".green(), short_id(&updated.id).cyan());
        }
    }
    Ok(())
}

/// Resolve an explicit id, or let the user pick one. `None` if the picker was aborted.
pub(super) fn select_target(ctx: &Context, id: Option<&str>) -> Result<Option<Snippet>> {
    if let Some(id) = id {
        return Ok(Some(ctx.store.resolve(id)?));
    }
    if !interactive() {
        anyhow::bail!("No snippet id given\n\nSuggestion: pass an id from 'linippet list'.");
    }
    let snippets = ctx.load_nonempty()?;
    picker::run(snippets, "", ctx.config.prompt())
}
