//! Car search demo - main entry point
//!
//! Runs a few example searches against the embedded catalog and prints each
//! response as JSON.

use anyhow::Result;
use car_search::{SearchEngine, SearchFilters};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so stdout stays valid JSON)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = SearchEngine::with_demo_catalog();
    info!("Catalog loaded with {} records", engine.record_count());

    println!("Example 1: Simple fuzzy search");
    let response = engine.search("swift", &SearchFilters::default());
    println!("{}", serde_json::to_string_pretty(&response)?);

    println!("\nExample 2: Filtered search (diesel cars from 2019 on)");
    let filters = SearchFilters {
        fuel: Some("Diesel".parse()?),
        min_year: Some(2019),
        ..Default::default()
    };
    let response = engine.search("creta", &filters);
    println!("{}", serde_json::to_string_pretty(&response)?);

    println!("\nExample 3: Predictive typing (query=\"hyu\")");
    let response = engine.search("hyu", &SearchFilters::default());
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
