// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pick a snippet and print it with placeholders filled in

use anyhow::Result;
use std::collections::HashMap;

use super::{interactive, prompt_line, Context};
use crate::picker;
use linippet::errors::NoMatchError;
use linippet::fuzzy::{search, split_terms, CancelToken};
use linippet::snippet::Snippet;
use linippet::template::{extract_args, fill};

/// Run the pick command
pub fn run(
    ctx: &Context,
    query: Option<&str>,
    first: bool,
    args: &[(String, String)],
) -> Result<()> {
    let snippets = ctx.load_nonempty()?;
    let query = query.unwrap_or("");

    let chosen = if first || !interactive() {
        best_match(&snippets, query)?
    } else {
        match picker::run(snippets, query, ctx.config.prompt())? {
            Some(snippet) => snippet,
            None => {
                tracing::info!("pick aborted");
                return Ok(());
            }
        }
    };

    let values: HashMap<String, String> = args.iter().cloned().collect();
    let line = fill_interactively(&chosen.snippet, values)?;
    println!("{}", line);
    Ok(())
}

/// Top-ranked snippet for `query`; the first stored one for a blank query.
pub fn best_match(snippets: &[Snippet], query: &str) -> Result<Snippet> {
    if split_terms(query).is_empty() {
        if let Some(first) = snippets.first() {
            return Ok(first.clone());
        }
    }
    let results = search(&CancelToken::new(), query, snippets).unwrap_or_default();
    match results.into_iter().next() {
        Some(top) => {
            tracing::debug!(id = %top.snippet.id, score = top.score, "best match");
            Ok(top.snippet.clone())
        }
        None => Err(NoMatchError {
            query: query.to_string(),
        }
        .into()),
    }
}

/// Prompt for every placeholder not already in `values`, then substitute.
fn fill_interactively(text: &str, mut values: HashMap<String, String>) -> Result<String> {
    for arg in extract_args(text) {
        if values.contains_key(&arg.name) {
            continue;
        }
        let label = match &arg.default {
            Some(default) => format!("{} [{}]: ", arg.name, default),
            None => format!("{}: ", arg.name),
        };
        let input = prompt_line(&label)?.unwrap_or_default();
        let value = match (input.is_empty(), arg.default) {
            (true, Some(default)) => default,
            _ => input,
        };
        values.insert(arg.name, value);
    }
    Ok(fill(text, &values))
}
