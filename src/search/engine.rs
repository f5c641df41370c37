//! Search engine over an in-memory list of car records.
//!
//! Each query is an independent pure computation: a single linear pass that
//! collects suggestions, scores every record against the query, drops
//! records failing a predicate, and sorts the survivors by relevance.

use crate::matching::{normalize_query, similarity_ratio};
use crate::models::{Car, FuelType, Transmission};
use serde::Serialize;

/// Optional attribute predicates applied to scored records.
///
/// Absent fields impose no restriction; numeric bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Required fuel type
    pub fuel: Option<FuelType>,

    /// Minimum mileage (inclusive)
    pub min_mileage: Option<u32>,

    /// Maximum mileage (inclusive)
    pub max_mileage: Option<u32>,

    /// Earliest model year (inclusive)
    pub min_year: Option<u16>,

    /// Latest model year (inclusive)
    pub max_year: Option<u16>,

    /// Required transmission
    pub transmission: Option<Transmission>,
}

impl SearchFilters {
    /// Check whether a car satisfies every present predicate.
    pub fn matches(&self, car: &Car) -> bool {
        if let Some(fuel) = self.fuel {
            if car.fuel != fuel {
                return false;
            }
        }
        if let Some(min) = self.min_mileage {
            if car.mileage < min {
                return false;
            }
        }
        if let Some(max) = self.max_mileage {
            if car.mileage > max {
                return false;
            }
        }
        if let Some(min) = self.min_year {
            if car.year < min {
                return false;
            }
        }
        if let Some(max) = self.max_year {
            if car.year > max {
                return false;
            }
        }
        if let Some(transmission) = self.transmission {
            if car.transmission != transmission {
                return false;
            }
        }
        true
    }
}

/// A catalog record paired with its computed relevance score.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredCar {
    /// The record, with its fields inlined in serialized output
    #[serde(flatten)]
    pub car: Car,

    /// Similarity between the query and the record name, in [0, 1],
    /// rounded to 2 decimal places
    pub relevance_score: f64,
}

/// Response returned by [`SearchEngine::search`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResponse {
    /// The normalized (trimmed, lowercased) query text
    pub query: String,

    /// Names containing the normalized query as a substring, in record
    /// order, not deduplicated
    pub suggestions: Vec<String>,

    /// Scored records that passed every predicate, sorted by descending
    /// relevance (stable on ties)
    pub results: Vec<ScoredCar>,
}

/// Search engine over a fixed list of car records.
///
/// The engine holds the record set immutably and `search` takes `&self`,
/// so a single engine can serve multiple callers without coordination.
pub struct SearchEngine {
    /// The record set, fixed for the engine's lifetime
    cars: Vec<Car>,
}

impl SearchEngine {
    /// Create an engine over an arbitrary record set.
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }

    /// Create an engine over the embedded demonstration catalog.
    pub fn with_demo_catalog() -> Self {
        Self::new(crate::catalog::cars().to_vec())
    }

    /// Number of records the engine scans per query.
    pub fn record_count(&self) -> usize {
        self.cars.len()
    }

    /// Execute a query against the record set.
    ///
    /// The query text is trimmed and lowercased before use. Suggestions are
    /// names containing the normalized query as a literal substring.
    /// Every record is scored before predicates are applied, so filtering
    /// never affects scoring. Never fails: an empty query, absent filters,
    /// or zero matches all produce a normal response.
    ///
    /// # Arguments
    /// * `query` - Arbitrary query text
    /// * `filters` - Optional attribute predicates; `Default` means none
    pub fn search(&self, query: &str, filters: &SearchFilters) -> SearchResponse {
        let query = normalize_query(query);

        let suggestions: Vec<String> = self
            .cars
            .iter()
            .filter(|car| car.name.to_lowercase().contains(query.as_str()))
            .map(|car| car.name.clone())
            .collect();

        let mut results: Vec<ScoredCar> = Vec::new();
        for car in &self.cars {
            let score = similarity_ratio(&query, &car.name.to_lowercase());

            if !filters.matches(car) {
                continue;
            }

            results.push(ScoredCar {
                car: car.clone(),
                relevance_score: round2(score),
            });
        }

        // Stable sort: equal scores keep record order.
        results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        tracing::debug!(
            "Query '{}' produced {} suggestions and {} of {} records",
            query,
            suggestions.len(),
            results.len(),
            self.cars.len()
        );

        SearchResponse {
            query,
            suggestions,
            results,
        }
    }
}

/// Round a score to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
