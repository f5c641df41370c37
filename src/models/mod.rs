//! Data models for the car catalog.
//!
//! This module contains the record type for a catalog entry and the typed
//! enumerations for its categorical fields.

pub mod car;

pub use car::{Car, FuelType, Transmission};
