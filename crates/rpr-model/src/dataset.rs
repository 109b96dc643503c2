use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Decision counters for one country row.
///
/// Each counter is either a recorded non-negative count or `None` for
/// "not recorded". A row keeps `None` values only when every cell in the
/// row was left blank; a partially filled row reads blank cells as zero.
/// That defaulting happens in the form parser, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decisions {
    pub yes: Option<u32>,
    pub no: Option<u32>,
    pub yes_after_comp: Option<u32>,
    pub no_after_comp: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_other_conditions: Option<u32>,
}

impl Decisions {
    /// Returns true when no counter in the row was recorded.
    pub fn is_empty(&self) -> bool {
        self.yes.is_none()
            && self.no.is_none()
            && self.yes_after_comp.is_none()
            && self.no_after_comp.is_none()
            && self.no_other_conditions.is_none()
    }

    /// Sum of the recorded counters.
    pub fn total(&self) -> u64 {
        [
            self.yes,
            self.no,
            self.yes_after_comp,
            self.no_after_comp,
            self.no_other_conditions,
        ]
        .iter()
        .flatten()
        .map(|count| u64::from(*count))
        .sum()
    }
}

/// One country row within a route.
///
/// `code` is `None` only while the row is still being filled in; the
/// validator rejects terminal submissions that leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionCountry {
    pub code: Option<String>,
    pub decisions: Decisions,
}

impl DecisionCountry {
    pub fn new(code: impl Into<String>, decisions: Decisions) -> Self {
        Self {
            code: Some(code.into()),
            decisions,
        }
    }

    /// The canonical placeholder row: no country selected, nothing recorded.
    pub fn empty() -> Self {
        Self {
            code: None,
            decisions: Decisions::default(),
        }
    }
}

/// A recognition route with its ordered country rows.
///
/// Display order is array order. A finalized route has a non-blank name,
/// unique within its dataset, and at least one country row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRoute {
    pub name: String,
    pub countries: Vec<DecisionCountry>,
}

impl DecisionRoute {
    pub fn new(name: impl Into<String>, countries: Vec<DecisionCountry>) -> Self {
        Self {
            name: name.into(),
            countries,
        }
    }

    /// The canonical empty route: blank name, one placeholder country.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            countries: vec![DecisionCountry::empty()],
        }
    }

    /// Sum of recorded counters across all rows of this route.
    pub fn total(&self) -> u64 {
        self.countries
            .iter()
            .map(|country| country.decisions.total())
            .sum()
    }
}

/// Workflow status of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    /// Pre-existence placeholder for a dataset that has never been saved.
    /// Never persisted.
    Unconfirmed,
    /// Saved and editable by members of the owning organisation.
    Draft,
    /// Handed off to central review; editing re-opens it as a draft.
    Submitted,
    /// Published. Requires the publish permission.
    Live,
}

impl DatasetStatus {
    /// Returns true for statuses that exist in the dataset store.
    pub fn is_persisted(self) -> bool {
        !matches!(self, DatasetStatus::Unconfirmed)
    }

    /// Returns true when an authorized save re-opens the workflow as a draft.
    pub fn reopens_on_edit(self) -> bool {
        matches!(self, DatasetStatus::Submitted | DatasetStatus::Live)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetStatus::Unconfirmed => "unconfirmed",
            DatasetStatus::Draft => "draft",
            DatasetStatus::Submitted => "submitted",
            DatasetStatus::Live => "live",
        }
    }
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifying triple of a dataset: one dataset per profession, organisation
/// and year.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DatasetKey {
    pub profession_id: String,
    pub organisation_id: String,
    pub year: i32,
}

impl DatasetKey {
    pub fn new(
        profession_id: impl Into<String>,
        organisation_id: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            profession_id: profession_id.into(),
            organisation_id: organisation_id.into(),
            year,
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.profession_id, self.organisation_id, self.year
        )
    }
}

/// The aggregate root: the decision data one organisation holds for one
/// profession and year.
///
/// Datasets are never hard-deleted; saving the same key again supersedes
/// the stored routes, status, user and `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDataset {
    pub profession_id: String,
    pub organisation_id: String,
    pub year: i32,
    pub status: DatasetStatus,
    pub routes: Vec<DecisionRoute>,
    /// Actor who last wrote the dataset.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DecisionDataset {
    pub fn key(&self) -> DatasetKey {
        DatasetKey::new(
            self.profession_id.clone(),
            self.organisation_id.clone(),
            self.year,
        )
    }

    /// Sum of recorded counters across the whole dataset.
    pub fn total(&self) -> u64 {
        self.routes.iter().map(DecisionRoute::total).sum()
    }
}
