//! Car Search - fuzzy name search with attribute filtering over a small
//! in-memory catalog.
//!
//! This library performs a linear scan over a fixed list of car records,
//! computing a string-similarity score against each record's name, applying
//! optional equality/range filters on the structured fields, and returning
//! the survivors sorted by relevance. It also produces predictive-typing
//! suggestions: the names containing the query as a literal substring.
//!
//! # Architecture
//!
//! - **models**: Car record and its categorical field types
//! - **error**: Custom error types for parse failures
//! - **catalog**: The embedded demonstration record set
//! - **matching**: Query normalization and sequence similarity scoring
//! - **search**: The filter/score/sort engine
//!
//! # Example
//!
//! ```
//! use car_search::{SearchEngine, SearchFilters};
//!
//! let engine = SearchEngine::with_demo_catalog();
//! let response = engine.search("swift", &SearchFilters::default());
//!
//! assert_eq!(response.suggestions, vec!["Maruti Swift".to_string()]);
//! assert_eq!(response.results[0].car.id, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod matching;
pub mod models;
pub mod search;

pub use error::{ModelError, ModelResult};
pub use matching::{normalize_query, similarity_ratio};
pub use models::{Car, FuelType, Transmission};
pub use search::{ScoredCar, SearchEngine, SearchFilters, SearchResponse};
