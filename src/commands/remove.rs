// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delete a stored snippet

use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::edit::select_target;
use super::{ask, short_id, Context};
use crate::cli::OutputFormat;
use linippet::output::print_json;
use linippet::snippet::Snippet;

/// Run the remove command
///
/// A snippet chosen in the picker is only removed after a `y` answer on
/// stdin; an explicit id removes without asking.
pub fn run(ctx: &Context, id: Option<&str>) -> Result<()> {
    let Some(target) = select_target(ctx, id)? else {
        return Ok(());
    };
    let removed = if id.is_some() {
        Some(ctx.store.remove(&target.id)?)
    } else {
        remove_confirmed(ctx, &target, &mut io::stdin().lock(), &mut io::stderr())?
    };
    let Some(removed) = removed else {
        tracing::info!(id = %target.id, "remove cancelled");
        return Ok(());
    };

    match ctx.format {
        OutputFormat::Json => print_json(&removed, ctx.compact)?,
        OutputFormat::Text => {
            println!(
                "{} Removed snippet {}: {}",
                "✓".green(),
                short_id(&removed.id).cyan(),
                removed.snippet
            );
        }
    }
    Ok(())
}

/// Ask before removing `target`. `None` when the user declines.
fn remove_confirmed(
    ctx: &Context,
    target: &Snippet,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Option<Snippet>> {
    let label = format!("Remove '{}'? [y/N] ", target.snippet);
    let answer = ask(&label, input, out)?.unwrap_or_default();
    if !is_yes(&answer) {
        return Ok(None);
    }
    Ok(Some(ctx.store.remove(&target.id)?))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
