//! Search over the car catalog.
//!
//! This module provides the query operation: substring suggestions,
//! per-record similarity scoring, optional attribute predicates, and a
//! stable relevance sort.

pub mod engine;

pub use engine::{ScoredCar, SearchEngine, SearchFilters, SearchResponse};
