//! Query normalization and string similarity utilities.
//!
//! This module provides the character-level sequence similarity ratio used
//! to rank records by how closely their names resemble the query.

pub mod similarity;

pub use similarity::{normalize_query, similarity_ratio};
