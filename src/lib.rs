// SPDX-License-Identifier: MIT OR Apache-2.0

//! linippet - one-line shell snippet store
//!
//! Shared modules for the linippet CLI: the fuzzy ranking engine, the
//! snippet store, placeholder templating, configuration and output helpers.

pub mod config;
pub mod errors;
pub mod fuzzy;
pub mod output;
pub mod snippet;
pub mod template;
