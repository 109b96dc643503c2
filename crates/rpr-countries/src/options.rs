use serde::Serialize;

use crate::registry::CountryRegistry;

/// One entry of a country select list, ready for the presenter layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl CountryRegistry {
    /// Enumerate the full set as select-list options, marking at most one
    /// entry selected. `selected` is matched against the canonical code.
    pub fn select_options(&self, selected: Option<&str>) -> Vec<SelectOption> {
        self.all()
            .iter()
            .map(|country| SelectOption {
                value: country.code.clone(),
                label: country.name.clone(),
                selected: selected == Some(country.code.as_str()),
            })
            .collect()
    }
}
