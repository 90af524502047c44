// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fuzzy matching and ranking engine
//!
//! Terms are aligned against each candidate with a small DP table, scored
//! with boundary/run/gap heuristics, and combined with AND semantics.

pub mod align;
pub mod class;
pub mod live;
pub mod score;
pub mod search;

pub use align::align;
pub use class::{classify, CharClass};
pub use live::{Hit, LiveResults, LiveSearch};
pub use score::score;
pub use search::{search, split_terms, CancelToken, SearchResult};
