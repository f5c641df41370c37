//! Car model representing a vehicle in the searchable catalog.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A car in the searchable catalog.
///
/// Records are immutable once constructed; the search engine operates on
/// copies when building responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    /// Unique identifier for the car
    pub id: u32,

    /// Display name, e.g. "Maruti Swift"
    pub name: String,

    /// Fuel type
    pub fuel: FuelType,

    /// Mileage in km per litre (km per charge for electric cars; 0 when
    /// not applicable)
    pub mileage: u32,

    /// Model year
    pub year: u16,

    /// Transmission type
    pub transmission: Transmission,
}

/// Fuel type of a car.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FuelType {
    /// Petrol / gasoline engine
    Petrol,

    /// Diesel engine
    Diesel,

    /// Battery electric
    Electric,

    /// Compressed natural gas
    #[serde(rename = "CNG")]
    Cng,

    /// Petrol-electric hybrid
    Hybrid,
}

impl FuelType {
    /// Get the canonical display name for the fuel type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Cng => "CNG",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = ModelError;

    /// Parse a fuel type name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" => Ok(Self::Petrol),
            "diesel" => Ok(Self::Diesel),
            "electric" => Ok(Self::Electric),
            "cng" => Ok(Self::Cng),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(ModelError::UnknownFuel(s.to_string())),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transmission type of a car.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transmission {
    /// Manual gearbox
    Manual,

    /// Automatic gearbox
    Automatic,
}

impl Transmission {
    /// Get the canonical display name for the transmission type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = ModelError;

    /// Parse a transmission name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Self::Manual),
            "automatic" => Ok(Self::Automatic),
            _ => Err(ModelError::UnknownTransmission(s.to_string())),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
