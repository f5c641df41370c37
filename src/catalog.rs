//! Embedded demonstration catalog.
//!
//! The record set is a fixed, process-lifetime constant. Nothing in the
//! crate mutates it; search builds responses from copies.

use crate::models::{Car, FuelType, Transmission};
use once_cell::sync::Lazy;

static CARS: Lazy<Vec<Car>> = Lazy::new(|| {
    vec![
        Car {
            id: 1,
            name: "Maruti Swift".to_string(),
            fuel: FuelType::Petrol,
            mileage: 20,
            year: 2018,
            transmission: Transmission::Manual,
        },
        Car {
            id: 2,
            name: "Hyundai Creta".to_string(),
            fuel: FuelType::Diesel,
            mileage: 17,
            year: 2020,
            transmission: Transmission::Automatic,
        },
        Car {
            id: 3,
            name: "Tata Nexon EV".to_string(),
            fuel: FuelType::Electric,
            mileage: 0,
            year: 2022,
            transmission: Transmission::Automatic,
        },
        Car {
            id: 4,
            name: "Honda City".to_string(),
            fuel: FuelType::Petrol,
            mileage: 18,
            year: 2019,
            transmission: Transmission::Manual,
        },
        Car {
            id: 5,
            name: "Mahindra XUV700".to_string(),
            fuel: FuelType::Diesel,
            mileage: 15,
            year: 2023,
            transmission: Transmission::Automatic,
        },
        Car {
            id: 6,
            name: "Hyundai i20".to_string(),
            fuel: FuelType::Petrol,
            mileage: 21,
            year: 2021,
            transmission: Transmission::Manual,
        },
    ]
});

/// The fixed demonstration record set.
pub fn cars() -> &'static [Car] {
    &CARS
}
