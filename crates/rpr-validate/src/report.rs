use std::fmt;

use serde::{Serialize, Serializer};

/// Where in the rendered edit view an error belongs, 1-based so positions
/// match what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    /// The route name field at `routes[route]`.
    Route { route: usize },
    /// The country select at `countries[route][country]`.
    Country { route: usize, country: usize },
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLocation::Route { route } => write!(f, "routes[{route}]"),
            FieldLocation::Country { route, country } => {
                write!(f, "countries[{route}][{country}]")
            }
        }
    }
}

impl Serialize for FieldLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One positional validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub location: FieldLocation,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.message)
    }
}

/// All errors found in one submission, accumulated in field order so every
/// problem surfaces in a single round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Rendered locations, handy for asserting positions in tests.
    pub fn locations(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|error| error.location.to_string())
            .collect()
    }

    pub(crate) fn push(&mut self, location: FieldLocation, message: &str) {
        self.errors.push(ValidationError {
            location,
            message: message.to_string(),
        });
    }
}
