//! Guard behavior: membership, creation-only checks and their skipping.

use std::cell::Cell;
use std::collections::BTreeMap;

use rpr_access::{
    AccessError, ProfessionAssociations, allowed_years, can_change_dataset,
    can_publish_dataset,
};
use rpr_model::{Actor, Permission};

const CURRENT_YEAR: i32 = 2026;

fn associations() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert(
        "profession-1".to_string(),
        vec!["org-1".to_string(), "org-2".to_string()],
    );
    map
}

/// Counts association lookups so skipped paths are observable.
struct SpyAssociations {
    inner: BTreeMap<String, Vec<String>>,
    calls: Cell<usize>,
}

impl SpyAssociations {
    fn new() -> Self {
        Self {
            inner: associations(),
            calls: Cell::new(0),
        }
    }
}

impl ProfessionAssociations for SpyAssociations {
    fn organisation_ids(&self, profession_id: &str) -> Vec<String> {
        self.calls.set(self.calls.get() + 1);
        self.inner.organisation_ids(profession_id)
    }
}

#[test]
fn member_of_the_target_organisation_may_change() {
    let actor = Actor::member_of("editor", "org-1");
    let result = can_change_dataset(
        &actor,
        &associations(),
        "profession-1",
        "org-1",
        2024,
        false,
        CURRENT_YEAR,
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn service_owner_may_change_any_organisation() {
    let actor = Actor::service_owner("admin");
    let result = can_change_dataset(
        &actor,
        &associations(),
        "profession-1",
        "org-2",
        2024,
        false,
        CURRENT_YEAR,
    );
    assert_eq!(result, Ok(()));
}

#[test]
fn outsider_is_unauthorized_regardless_of_existence() {
    let actor = Actor::member_of("editor", "org-9");
    for exists in [false, true] {
        let result = can_change_dataset(
            &actor,
            &associations(),
            "profession-1",
            "org-1",
            2024,
            exists,
            CURRENT_YEAR,
        );
        assert_eq!(result, Err(AccessError::Unauthorized), "exists: {exists}");
    }
}

#[test]
fn creation_requires_the_organisation_to_be_associated() {
    let actor = Actor::member_of("editor", "org-9");
    let result = can_change_dataset(
        &actor,
        &associations(),
        "profession-1",
        "org-9",
        2024,
        false,
        CURRENT_YEAR,
    );
    assert!(matches!(result, Err(AccessError::BadRequest { .. })));
}

#[test]
fn creation_requires_a_year_in_the_rolling_window() {
    let actor = Actor::member_of("editor", "org-1");
    for year in [2019, CURRENT_YEAR, CURRENT_YEAR + 1] {
        let result = can_change_dataset(
            &actor,
            &associations(),
            "profession-1",
            "org-1",
            year,
            false,
            CURRENT_YEAR,
        );
        assert!(
            matches!(result, Err(AccessError::BadRequest { .. })),
            "year: {year}"
        );
    }
    // Boundary years are allowed: first collection year and last complete
    // year.
    for year in [2020, CURRENT_YEAR - 1] {
        let result = can_change_dataset(
            &actor,
            &associations(),
            "profession-1",
            "org-1",
            year,
            false,
            CURRENT_YEAR,
        );
        assert_eq!(result, Ok(()), "year: {year}");
    }
}

#[test]
fn existing_dataset_skips_creation_checks_entirely() {
    let spy = SpyAssociations::new();
    let actor = Actor::member_of("editor", "org-1");
    // Association and year would both fail if checked.
    let result = can_change_dataset(
        &actor,
        &spy,
        "profession-unknown",
        "org-1",
        1900,
        true,
        CURRENT_YEAR,
    );
    assert_eq!(result, Ok(()));
    assert_eq!(spy.calls.get(), 0);
}

#[test]
fn creation_consults_associations_once() {
    let spy = SpyAssociations::new();
    let actor = Actor::member_of("editor", "org-1");
    let result = can_change_dataset(
        &actor,
        &spy,
        "profession-1",
        "org-1",
        2024,
        false,
        CURRENT_YEAR,
    );
    assert_eq!(result, Ok(()));
    assert_eq!(spy.calls.get(), 1);
}

#[test]
fn publish_needs_the_distinct_permission() {
    let member = Actor::member_of("editor", "org-1");
    assert_eq!(can_publish_dataset(&member), Err(AccessError::Unauthorized));

    // Membership does not help; the permission does, wherever it is held.
    let publisher =
        Actor::member_of("publisher", "org-9").with_permission(Permission::PublishDecisionData);
    assert_eq!(can_publish_dataset(&publisher), Ok(()));

    // Even a service owner needs the explicit grant.
    let owner = Actor::service_owner("admin");
    assert_eq!(can_publish_dataset(&owner), Err(AccessError::Unauthorized));
}

#[test]
fn allowed_window_runs_from_first_year_to_last_complete_year() {
    let window = allowed_years(2026);
    assert_eq!(*window.start(), 2020);
    assert_eq!(*window.end(), 2025);
}
