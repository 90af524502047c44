// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal and JSON output helpers

use colored::Colorize;
use serde::Serialize;
use std::io::IsTerminal;

/// Whether stdout output should carry ANSI colors
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Byte ranges of `text` covering every character touched by `positions`.
///
/// Adjacent highlighted characters are merged into one range.
pub fn highlight_ranges(text: &str, positions: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for (start, ch) in text.char_indices() {
        let end = start + ch.len_utf8();
        if !positions.iter().any(|&p| p >= start && p < end) {
            continue;
        }
        match ranges.last_mut() {
            Some(last) if last.1 == start => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }
    ranges
}

/// Render `text` with matched characters emphasized
pub fn highlight(text: &str, positions: &[usize], use_color: bool) -> String {
    if !use_color || positions.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + 16);
    let mut cursor = 0;
    for (start, end) in highlight_ranges(text, positions) {
        out.push_str(&text[cursor..start]);
        out.push_str(&text[start..end].green().bold().to_string());
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Print a value as JSON, pretty unless `compact`
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> anyhow::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", rendered);
    Ok(())
}
