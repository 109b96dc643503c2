use rpr_countries::{CountryError, CountryRegistry};
use rpr_model::{DecisionCountry, DecisionRoute, Decisions};
use tracing::warn;

use crate::dto::DecisionDatasetForm;
use crate::value::parse_decision_value;

/// Hard cap on routes read from one submission. Bounds the cost of a
/// pathological post; honest submissions never come close.
pub const MAX_ROUTES: usize = 1000;
/// Hard cap on country rows read per route.
pub const MAX_COUNTRIES_PER_ROUTE: usize = 1000;

/// Build the nested route tree from a flat form submission.
///
/// Routes and their country rows come out in submission order. Country
/// identifiers are resolved against the registry only when a non-empty
/// value was submitted; blank cells stay `None`. Short or missing arrays
/// read as empty cells. A route that ends up with zero country rows gets
/// one empty placeholder so every route renders with at least one row.
///
/// Pure: no mutation of the form, no I/O beyond the in-memory registry.
pub fn parse_routes(
    form: &DecisionDatasetForm,
    countries: &CountryRegistry,
) -> Result<Vec<DecisionRoute>, CountryError> {
    if form.routes.len() > MAX_ROUTES {
        warn!(
            submitted = form.routes.len(),
            cap = MAX_ROUTES,
            "submission exceeds route cap, truncating"
        );
    }

    let mut routes = Vec::with_capacity(form.routes.len().min(MAX_ROUTES));
    for (route_index, name) in form.routes.iter().take(MAX_ROUTES).enumerate() {
        let row_count = form
            .countries
            .get(route_index)
            .map_or(0, |rows| rows.len().min(MAX_COUNTRIES_PER_ROUTE));

        let mut rows = Vec::with_capacity(row_count.max(1));
        for country_index in 0..row_count {
            rows.push(parse_country(form, countries, route_index, country_index)?);
        }
        if rows.is_empty() {
            rows.push(DecisionCountry::empty());
        }

        routes.push(DecisionRoute::new(name.clone(), rows));
    }
    Ok(routes)
}

fn parse_country(
    form: &DecisionDatasetForm,
    countries: &CountryRegistry,
    route: usize,
    country: usize,
) -> Result<DecisionCountry, CountryError> {
    let submitted = DecisionDatasetForm::cell(&form.countries, route, country);
    let code = if submitted.trim().is_empty() {
        None
    } else {
        Some(countries.find(submitted)?.code.clone())
    };

    let yes = DecisionDatasetForm::cell(&form.yeses, route, country);
    let no = DecisionDatasetForm::cell(&form.noes, route, country);
    let yes_after_comp = DecisionDatasetForm::cell(&form.yes_after_comps, route, country);
    let no_after_comp = DecisionDatasetForm::cell(&form.no_after_comps, route, country);
    let no_other_conditions = form
        .no_other_conditions
        .as_deref()
        .map(|grid| DecisionDatasetForm::cell(grid, route, country));

    // Blank-row rule: a fully blank row stays "not recorded"; once any cell
    // is filled in, the rest of the row reads as zero.
    let all_blank = [
        yes,
        no,
        yes_after_comp,
        no_after_comp,
        no_other_conditions.unwrap_or(""),
    ]
    .iter()
    .all(|cell| cell.trim().is_empty());
    let zero_invalid = !all_blank;

    Ok(DecisionCountry {
        code,
        decisions: Decisions {
            yes: parse_decision_value(yes, zero_invalid),
            no: parse_decision_value(no, zero_invalid),
            yes_after_comp: parse_decision_value(yes_after_comp, zero_invalid),
            no_after_comp: parse_decision_value(no_after_comp, zero_invalid),
            no_other_conditions: no_other_conditions
                .and_then(|cell| parse_decision_value(cell, zero_invalid)),
        },
    })
}
