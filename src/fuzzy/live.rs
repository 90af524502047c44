// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-ahead search: one cancellable worker per keystroke.
//!
//! Each [`LiveSearch::submit`] cancels the previous worker and starts a new
//! one over the same snapshot. Finished batches come back tagged with their
//! generation and query text; [`LiveSearch::poll`] drops anything that does
//! not belong to the latest submission.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::search::{search, CancelToken, SearchResult};
use crate::snippet::Snippet;

/// Owned form of a [`SearchResult`] that can cross threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub positions: Vec<usize>,
    pub score: i64,
}

impl From<SearchResult<'_>> for Hit {
    fn from(result: SearchResult<'_>) -> Self {
        Self {
            index: result.index,
            positions: result.positions,
            score: result.score,
        }
    }
}

/// Results for one completed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveResults {
    pub query: String,
    pub hits: Vec<Hit>,
}

struct Batch {
    generation: u64,
    results: LiveResults,
}

pub struct LiveSearch {
    snippets: Arc<[Snippet]>,
    generation: u64,
    query: String,
    cancel: Option<CancelToken>,
    tx: Sender<Batch>,
    rx: Receiver<Batch>,
}

impl LiveSearch {
    pub fn new(snippets: impl Into<Arc<[Snippet]>>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            snippets: snippets.into(),
            generation: 0,
            query: String::new(),
            cancel: None,
            tx,
            rx,
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// The most recently submitted query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Start searching for `query`, superseding any in-flight search.
    pub fn submit(&mut self, query: &str) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }

        self.generation = self.generation.wrapping_add(1);
        self.query = query.to_string();
        let cancel = CancelToken::new();
        self.cancel = Some(cancel.clone());

        let generation = self.generation;
        let query = self.query.clone();
        let snippets = Arc::clone(&self.snippets);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let Some(results) = search(&cancel, &query, &snippets) else {
                tracing::trace!(generation, "live search superseded");
                return;
            };
            let hits = results.into_iter().map(Hit::from).collect();
            let _ = tx.send(Batch {
                generation,
                results: LiveResults { query, hits },
            });
        });
    }

    /// Drain finished workers and return the newest batch for the current query.
    pub fn poll(&mut self) -> Option<LiveResults> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(batch) => {
                    if batch.generation == self.generation && batch.results.query == self.query {
                        self.cancel = None;
                        latest = Some(batch.results);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }

    /// Block until the current query's results arrive.
    pub fn wait(&mut self) -> Option<LiveResults> {
        loop {
            let batch = self.rx.recv().ok()?;
            if batch.generation == self.generation && batch.results.query == self.query {
                self.cancel = None;
                return Some(batch.results);
            }
        }
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
