//! The fixed set of cities with published trip data.

use crate::dataset::DatasetError;

/// A city with a backing trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities, in menu order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Resolves a city from user input: the single-letter code or the full
    /// name, case-insensitive.
    pub fn parse(input: &str) -> Result<City, DatasetError> {
        match input.trim().to_lowercase().as_str() {
            "c" | "chicago" => Ok(City::Chicago),
            "n" | "new york city" => Ok(City::NewYorkCity),
            "w" | "washington" => Ok(City::Washington),
            other => Err(DatasetError::UnknownCity(other.to_string())),
        }
    }

    /// File name of the backing CSV inside the data directory.
    pub fn data_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}
