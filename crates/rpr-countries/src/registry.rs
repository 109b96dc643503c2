use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CountryError;

/// The reference CSV shipped with the crate. The set is closed; there is no
/// runtime override.
const COUNTRIES_CSV: &str = include_str!("../data/countries.csv");

/// One canonical country: ISO 3166-1 alpha-2 code plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// The full country set, indexed by code and by name for lookup.
///
/// Loaded once at startup and passed by reference; lookups are O(log n)
/// map reads over a fixed set of ~195 entries.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_code: BTreeMap<String, usize>,
    by_name: BTreeMap<String, usize>,
}

impl CountryRegistry {
    /// Parse the embedded reference data.
    pub fn load() -> Result<Self, CountryError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(COUNTRIES_CSV.as_bytes());

        let mut countries = Vec::new();
        for record in reader.deserialize::<Country>() {
            let country = record.map_err(|error| CountryError::Data {
                message: error.to_string(),
            })?;
            countries.push(country);
        }

        let mut by_code = BTreeMap::new();
        let mut by_name = BTreeMap::new();
        for (index, country) in countries.iter().enumerate() {
            if by_code.insert(country.code.to_uppercase(), index).is_some() {
                return Err(CountryError::Data {
                    message: format!("duplicate country code: {}", country.code),
                });
            }
            by_name.insert(country.name.to_uppercase(), index);
        }

        Ok(Self {
            countries,
            by_code,
            by_name,
        })
    }

    /// Resolve a code or full name to its canonical country.
    ///
    /// Callers must not pass empty identifiers; the form parser substitutes
    /// `None` for blank cells before ever reaching this lookup.
    pub fn find(&self, identifier: &str) -> Result<&Country, CountryError> {
        let key = identifier.trim().to_uppercase();
        self.by_code
            .get(&key)
            .or_else(|| self.by_name.get(&key))
            .map(|index| &self.countries[*index])
            .ok_or_else(|| CountryError::not_found(identifier))
    }

    /// All countries in reference order.
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
