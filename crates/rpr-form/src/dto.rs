use serde::{Deserialize, Serialize};

/// The flat form submission for one dataset edit page.
///
/// The edit view posts parallel arrays indexed `[route][country]`; this type
/// is the serialization-format compromise kept strictly at the boundary.
/// Everything behind the parser works on the nested
/// [`rpr_model::DecisionRoute`] tree instead.
///
/// Arrays may be shorter than the rendered matrix (browsers drop empty
/// trailing fields); missing entries read as empty strings, never as errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionDatasetForm {
    /// Route names in display order.
    pub routes: Vec<String>,
    /// Submitted country identifier per route and row; empty = none selected.
    pub countries: Vec<Vec<String>>,
    pub yeses: Vec<Vec<String>>,
    pub noes: Vec<Vec<String>>,
    pub yes_after_comps: Vec<Vec<String>>,
    pub no_after_comps: Vec<Vec<String>>,
    /// Fifth counter column; older edit views do not submit it.
    pub no_other_conditions: Option<Vec<Vec<String>>>,
    /// Raw edit-action token, parsed by [`rpr_model::EditAction`].
    pub action: String,
}

impl DecisionDatasetForm {
    /// Read one cell of a parallel array, treating short arrays as empty.
    pub(crate) fn cell(grid: &[Vec<String>], route: usize, country: usize) -> &str {
        grid.get(route)
            .and_then(|row| row.get(country))
            .map_or("", String::as_str)
    }
}
