// SPDX-License-Identifier: MIT OR Apache-2.0

//! `${{name}}` / `${{name:default}}` placeholders in snippets.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// Names are ASCII word characters only.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{\{((?-u:\w)+)(?::([^}]*))?\}\}").expect("valid placeholder regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub name: String,
    pub default: Option<String>,
}

pub fn has_args(text: &str) -> bool {
    PLACEHOLDER_RE.is_match(text)
}

/// Unique placeholders in order of first appearance.
pub fn extract_args(text: &str) -> Vec<Placeholder> {
    let mut args: Vec<Placeholder> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(text) {
        let name = &caps[1];
        if args.iter().any(|a| a.name == name) {
            continue;
        }
        args.push(Placeholder {
            name: name.to_string(),
            default: caps.get(2).map(|m| m.as_str().to_string()),
        });
    }
    args
}

/// Substitute `values` into `text`.
///
/// A placeholder without a value falls back to its own default and is left
/// untouched when it has neither.
pub fn fill(text: &str, values: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures| {
            if let Some(value) = values.get(&caps[1]) {
                return value.clone();
            }
            match caps.get(2) {
                Some(default) => default.as_str().to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
