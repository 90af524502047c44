// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-term search over an in-memory snippet collection.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{align, score};
use crate::snippet::Snippet;

/// Cooperative cancellation flag shared between a search and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// A snippet that matched every term of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    /// Index of the snippet in the searched slice.
    #[serde(skip)]
    pub index: usize,
    #[serde(flatten)]
    pub snippet: &'a Snippet,
    /// Byte offsets of each term's matches, concatenated in term order.
    pub positions: Vec<usize>,
    pub score: i64,
}

/// Split a raw query into its whitespace-separated terms.
pub fn split_terms(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Rank `candidates` against `query`.
///
/// Returns `None` when `cancel` fires before or during the run; a cancelled
/// search never yields a partial list. An empty or whitespace-only query
/// returns an empty list.
pub fn search<'a>(
    cancel: &CancelToken,
    query: &str,
    candidates: &'a [Snippet],
) -> Option<Vec<SearchResult<'a>>> {
    if cancel.is_cancelled() {
        return None;
    }

    let terms = split_terms(query);
    if terms.is_empty() {
        return Some(Vec::new());
    }

    let mut results = Vec::new();
    for (index, snippet) in candidates.iter().enumerate() {
        if cancel.is_cancelled() {
            tracing::debug!(query, scanned = index, "search cancelled");
            return None;
        }
        if let Some((positions, score)) = match_all_terms(&terms, &snippet.snippet) {
            results.push(SearchResult {
                index,
                snippet,
                positions,
                score,
            });
        }
    }

    sort_results(&mut results);
    tracing::debug!(
        query,
        terms = terms.len(),
        candidates = candidates.len(),
        matched = results.len(),
        "search finished"
    );
    Some(results)
}

/// Every term must align; positions concatenate and scores add up.
fn match_all_terms(terms: &[&str], text: &str) -> Option<(Vec<usize>, i64)> {
    terms
        .iter()
        .try_fold((Vec::new(), 0i64), |(mut positions, total), term| {
            let term_positions = align(term, text)?;
            let term_score = score(term, text, &term_positions);
            positions.extend(term_positions);
            Some((positions, total + term_score))
        })
}

/// Score descending, then shorter text first. Stable for full ties.
fn sort_results(results: &mut [SearchResult<'_>]) {
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.snippet.snippet.len().cmp(&b.snippet.snippet.len()))
    });
}
