//! Workflow tests: structural redisplay, validation gating, authorization
//! and the status lifecycle.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use rpr_access::AccessError;
use rpr_countries::CountryRegistry;
use rpr_engine::{
    DecisionDatasetRepository, EditEngine, EngineError, InMemoryDatasetRepository,
    SubmissionOutcome,
};
use rpr_form::DecisionDatasetForm;
use rpr_model::{Actor, DatasetKey, DatasetStatus, Permission};

fn registry() -> CountryRegistry {
    CountryRegistry::load().expect("load countries")
}

fn associations() -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();
    map.insert("profession-1".to_string(), vec!["org-1".to_string()]);
    map
}

fn key() -> DatasetKey {
    DatasetKey::new("profession-1", "org-1", 2024)
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("timestamp")
}

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

/// Two routes, three countries, full decision arrays.
fn sample_form(action: &str) -> DecisionDatasetForm {
    DecisionDatasetForm {
        routes: vec!["Example route 1".to_string(), "Example route 2".to_string()],
        countries: grid(&[&["Italy"], &["Japan", "Germany"]]),
        yeses: grid(&[&["4"], &["5", "6"]]),
        noes: grid(&[&["1"], &["", "2"]]),
        yes_after_comps: grid(&[&["0"], &["1", ""]]),
        no_after_comps: grid(&[&["0"], &["0", "3"]]),
        action: action.to_string(),
        ..DecisionDatasetForm::default()
    }
}

#[test]
fn remove_country_redisplays_the_spliced_matrix() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("removeCountry:2:1"),
            now(),
        )
        .expect("handle submission");

    let SubmissionOutcome::Redisplay { routes } = outcome else {
        panic!("expected redisplay, got {outcome:?}");
    };
    assert_eq!(routes.len(), 2);

    // Route 1 is untouched.
    assert_eq!(routes[0].name, "Example route 1");
    assert_eq!(routes[0].countries.len(), 1);
    assert_eq!(routes[0].countries[0].code.as_deref(), Some("IT"));
    assert_eq!(routes[0].countries[0].decisions.yes, Some(4));

    // Route 2 lost Japan and kept Germany with its parsed decisions.
    assert_eq!(routes[1].countries.len(), 1);
    let germany = &routes[1].countries[0];
    assert_eq!(germany.code.as_deref(), Some("DE"));
    assert_eq!(germany.decisions.yes, Some(6));
    assert_eq!(germany.decisions.no, Some(2));
    // Partial row: the blank cell reads as zero.
    assert_eq!(germany.decisions.yes_after_comp, Some(0));
    assert_eq!(germany.decisions.no_after_comp, Some(3));

    // Nothing was persisted.
    assert!(repository.is_empty());
}

#[test]
fn add_route_appends_a_placeholder() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("addRoute"),
            now(),
        )
        .expect("handle submission");

    let SubmissionOutcome::Redisplay { routes } = outcome else {
        panic!("expected redisplay, got {outcome:?}");
    };
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[2].name, "");
    assert_eq!(routes[2].countries.len(), 1);
    assert_eq!(routes[2].countries[0].code, None);
}

#[test]
fn unrecognized_action_redisplays_unchanged() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("rotate"),
            now(),
        )
        .expect("handle submission");

    let SubmissionOutcome::Redisplay { routes } = outcome else {
        panic!("expected redisplay, got {outcome:?}");
    };
    // Same structure the form described: no mutation happened.
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[1].countries.len(), 2);
    assert!(repository.is_empty());
}

#[test]
fn first_save_creates_a_draft() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("save"),
            now(),
        )
        .expect("handle submission");

    let SubmissionOutcome::Saved { dataset } = outcome else {
        panic!("expected saved, got {outcome:?}");
    };
    assert_eq!(dataset.status, DatasetStatus::Draft);
    assert_eq!(dataset.user_id, "editor");
    assert_eq!(dataset.created_at, now());
    assert_eq!(dataset.updated_at, now());
    assert_eq!(repository.find(&key()), Some(dataset));
}

#[test]
fn resave_preserves_created_at_and_supersedes() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);
    let first = now();
    let later = first + chrono::Duration::hours(2);

    engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("save"),
            first,
        )
        .expect("first save");
    let outcome = engine
        .handle_at(
            &Actor::member_of("colleague", "org-1"),
            &key(),
            &sample_form("save"),
            later,
        )
        .expect("second save");

    let SubmissionOutcome::Saved { dataset } = outcome else {
        panic!("expected saved, got {outcome:?}");
    };
    assert_eq!(dataset.created_at, first);
    assert_eq!(dataset.updated_at, later);
    assert_eq!(dataset.user_id, "colleague");
    assert_eq!(repository.len(), 1);
}

#[test]
fn submit_hands_off_for_review() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("submit"),
            now(),
        )
        .expect("handle submission");

    let SubmissionOutcome::Saved { dataset } = outcome else {
        panic!("expected saved, got {outcome:?}");
    };
    assert_eq!(dataset.status, DatasetStatus::Submitted);
}

#[test]
fn editing_a_submitted_dataset_reopens_it_as_draft() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("submit"),
            now(),
        )
        .expect("submit");
    let outcome = engine
        .handle_at(
            &Actor::member_of("editor", "org-1"),
            &key(),
            &sample_form("save"),
            now(),
        )
        .expect("resave");

    let SubmissionOutcome::Saved { dataset } = outcome else {
        panic!("expected saved, got {outcome:?}");
    };
    assert_eq!(dataset.status, DatasetStatus::Draft);
}

#[test]
fn publish_requires_the_permission() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();

    let denied = EditEngine::new(&mut repository, &registry, &associations).handle_at(
        &Actor::member_of("editor", "org-1"),
        &key(),
        &sample_form("publish"),
        now(),
    );
    assert_eq!(
        denied,
        Err(EngineError::Access(AccessError::Unauthorized))
    );
    assert!(repository.is_empty());

    let publisher = Actor::member_of("publisher", "org-1")
        .with_permission(Permission::PublishDecisionData);
    let outcome = EditEngine::new(&mut repository, &registry, &associations)
        .handle_at(&publisher, &key(), &sample_form("publish"), now())
        .expect("publish");
    let SubmissionOutcome::Saved { dataset } = outcome else {
        panic!("expected saved, got {outcome:?}");
    };
    assert_eq!(dataset.status, DatasetStatus::Live);
}

#[test]
fn invalid_submission_never_reaches_the_guard_or_store() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    let mut form = sample_form("save");
    form.routes[1] = String::new();
    // An outsider would be Unauthorized, but validation runs first.
    let outcome = engine
        .handle_at(&Actor::member_of("outsider", "org-9"), &key(), &form, now())
        .expect("handle submission");

    let SubmissionOutcome::Invalid { report } = outcome else {
        panic!("expected invalid, got {outcome:?}");
    };
    assert_eq!(report.locations(), vec!["routes[2]"]);
    assert!(repository.is_empty());
}

#[test]
fn creation_checks_apply_only_to_new_datasets() {
    let registry = registry();
    let associations = associations();
    let mut repository = InMemoryDatasetRepository::new();
    let mut engine = EditEngine::new(&mut repository, &registry, &associations);

    // Year 2030 is outside the window for a March 2026 clock.
    let out_of_window = DatasetKey::new("profession-1", "org-1", 2030);
    let denied = engine.handle_at(
        &Actor::member_of("editor", "org-1"),
        &out_of_window,
        &sample_form("save"),
        now(),
    );
    assert!(matches!(
        denied,
        Err(EngineError::Access(AccessError::BadRequest { .. }))
    ));
}
