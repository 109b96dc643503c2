//! Structural validation of a dataset submission.
//!
//! Validation runs against the raw form DTO, before parsing, so the
//! 1-based error positions line up with the fields the edit view rendered.
//! Parsed values are never re-derived here; numeric cells are normalized by
//! the parser and cannot fail.
//!
//! Rules:
//!
//! - Route names must not be blank.
//! - Route names must be unique within the dataset (exact match).
//! - Every country row must have a country selected.
//! - A country must not appear twice within the same route.

use rpr_form::{DecisionDatasetForm, MAX_COUNTRIES_PER_ROUTE, MAX_ROUTES};

use crate::report::{FieldLocation, ValidationReport};

const BLANK_ROUTE_NAME: &str = "Route name must not be blank";
const DUPLICATE_ROUTE_NAME: &str = "Route names must be unique";
const MISSING_COUNTRY: &str = "Select a country";
const DUPLICATE_COUNTRY: &str = "Country already appears in this route";

/// Validates one submission. Stateless; errors are accumulated rather than
/// short-circuited so the user sees every problem at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, form: &DecisionDatasetForm) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_routes(form, &mut report);
        self.check_countries(form, &mut report);
        report
    }

    fn check_routes(&self, form: &DecisionDatasetForm, report: &mut ValidationReport) {
        let names = &form.routes[..form.routes.len().min(MAX_ROUTES)];
        for (index, name) in names.iter().enumerate() {
            let location = FieldLocation::Route { route: index + 1 };
            if name.trim().is_empty() {
                report.push(location, BLANK_ROUTE_NAME);
                continue;
            }
            // Only the later occurrence is flagged; the first entry stays
            // the canonical one.
            if names[..index].contains(name) {
                report.push(location, DUPLICATE_ROUTE_NAME);
            }
        }
    }

    fn check_countries(&self, form: &DecisionDatasetForm, report: &mut ValidationReport) {
        for (route_index, cells) in form
            .countries
            .iter()
            .take(MAX_ROUTES)
            .enumerate()
        {
            let cells = &cells[..cells.len().min(MAX_COUNTRIES_PER_ROUTE)];
            for (country_index, cell) in cells.iter().enumerate() {
                let location = FieldLocation::Country {
                    route: route_index + 1,
                    country: country_index + 1,
                };
                let value = cell.trim();
                if value.is_empty() {
                    report.push(location, MISSING_COUNTRY);
                    continue;
                }
                if cells[..country_index]
                    .iter()
                    .any(|earlier| earlier.trim() == value)
                {
                    report.push(location, DUPLICATE_COUNTRY);
                }
            }
        }
    }
}
