use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use rpr_model::{Actor, Permission};
use tracing::warn;

use crate::error::AccessError;

/// First year the register collected decision data.
pub const FIRST_DATASET_YEAR: i32 = 2020;

/// The rolling window a new dataset's year must fall in: from the first
/// collection year through the last complete year.
pub fn allowed_years(current_year: i32) -> RangeInclusive<i32> {
    FIRST_DATASET_YEAR..=current_year - 1
}

/// The profession→organisation association lookup the guard consults on
/// first-time creation. Kept behind a trait so the existing-dataset path
/// provably never touches it and so tests can observe invocations.
pub trait ProfessionAssociations {
    fn organisation_ids(&self, profession_id: &str) -> Vec<String>;
}

impl ProfessionAssociations for BTreeMap<String, Vec<String>> {
    fn organisation_ids(&self, profession_id: &str) -> Vec<String> {
        self.get(profession_id).cloned().unwrap_or_default()
    }
}

/// May `actor` view or modify the dataset for this profession, organisation
/// and year?
///
/// Membership comes first: only service owners and members of the target
/// organisation get past it. When the dataset does not exist yet, the
/// request is also creating it, so the triple itself is checked: the
/// organisation must be associated with the profession and the year must
/// fall in [`allowed_years`]. Once a dataset exists its triple was
/// validated at creation time and stays editable even if the association
/// list later changes, so both creation checks are skipped entirely.
///
/// `current_year` is passed in rather than read from a clock so the guard
/// stays deterministic; callers take it from `chrono`.
pub fn can_change_dataset(
    actor: &Actor,
    associations: &dyn ProfessionAssociations,
    profession_id: &str,
    organisation_id: &str,
    year: i32,
    dataset_exists: bool,
    current_year: i32,
) -> Result<(), AccessError> {
    if !actor.acts_for(organisation_id) {
        warn!(
            actor = %actor.id,
            organisation = organisation_id,
            "dataset change denied: not a member"
        );
        return Err(AccessError::Unauthorized);
    }

    if dataset_exists {
        return Ok(());
    }

    if !associations
        .organisation_ids(profession_id)
        .iter()
        .any(|id| id == organisation_id)
    {
        return Err(AccessError::bad_request(format!(
            "organisation {organisation_id} is not associated with profession {profession_id}"
        )));
    }

    let allowed = allowed_years(current_year);
    if !allowed.contains(&year) {
        return Err(AccessError::bad_request(format!(
            "year {year} is outside the allowed range {}..={}",
            allowed.start(),
            allowed.end()
        )));
    }

    Ok(())
}

/// May `actor` publish a dataset? A distinct permission, independent of
/// organisation membership.
pub fn can_publish_dataset(actor: &Actor) -> Result<(), AccessError> {
    if actor.has_permission(Permission::PublishDecisionData) {
        Ok(())
    } else {
        warn!(actor = %actor.id, "dataset publish denied: missing permission");
        Err(AccessError::Unauthorized)
    }
}
