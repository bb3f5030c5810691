//! Alias tables and longest-match resolution.
//!
//! This module provides the vocabulary layer of the pipeline:
//! - Per-category alias tables (metric, index, sector, comparator, stock entity)
//! - The built-in vocabulary and JSON catalog loading
//! - Word-boundary-aware, longest-match resolution over normalized text

mod builtin;
mod catalog;
mod resolver;
mod table;

pub use catalog::{AliasCatalog, AliasCatalogSource};
pub use resolver::{contains_phrase, find_occurrences, resolve, resolve_suffix, Detection};
pub use table::{AliasCategory, AliasEntry, AliasTable};
