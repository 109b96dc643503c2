use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use comfy_table::Table;
use tracing::{debug, info};

use rpr_countries::CountryRegistry;
use rpr_engine::{EditEngine, InMemoryDatasetRepository, SubmissionOutcome};
use rpr_form::{DecisionDatasetForm, apply_action, parse_routes};
use rpr_model::{Actor, DatasetKey, EditAction, Permission};
use rpr_validate::{ValidationReport, Validator};

use crate::cli::{PreviewArgs, ValidateArgs};
use crate::summary::{apply_table_style, print_matrix, print_validation};

pub fn run_countries() -> Result<()> {
    let registry = CountryRegistry::load().context("load country reference data")?;
    let mut table = Table::new();
    table.set_header(vec!["Code", "Name"]);
    apply_table_style(&mut table);
    for country in registry.all() {
        table.add_row(vec![country.code.as_str(), country.name.as_str()]);
    }
    println!("{table}");
    println!("{} countries", registry.len());
    Ok(())
}

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let form = load_form(&args.form)?;
    let report = Validator::new().validate(&form);
    info!(
        errors = report.error_count(),
        form = %args.form.display(),
        "validated submission"
    );
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize report")?
        );
    } else {
        print_validation(&report);
    }
    Ok(report)
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let form = load_form(&args.form)?;
    let registry = CountryRegistry::load().context("load country reference data")?;

    match form.action.parse::<EditAction>() {
        Ok(action) if action.is_structural() => {
            debug!(%action, "applying structural action");
            println!("Action: {action}");
            let routes = parse_routes(&form, &registry).context("parse submission")?;
            print_matrix(&apply_action(&routes, &action));
        }
        Ok(action) => {
            println!("Action: {action} (terminal)");
            preview_terminal(&form, &registry)?;
        }
        Err(error) => {
            println!(
                "Action {:?} not recognized ({error}); structure unchanged.",
                form.action
            );
            let routes = parse_routes(&form, &registry).context("parse submission")?;
            print_matrix(&routes);
        }
    }
    Ok(())
}

/// Replay a terminal action through the real workflow engine against a
/// scratch in-memory store, acting as an unrestricted studio user.
fn preview_terminal(form: &DecisionDatasetForm, registry: &CountryRegistry) -> Result<()> {
    let mut repository = InMemoryDatasetRepository::new();
    let mut associations = BTreeMap::new();
    associations.insert(
        "profession".to_string(),
        vec!["organisation".to_string()],
    );
    // Last complete year, so the creation-window check passes.
    let key = DatasetKey::new("profession", "organisation", Utc::now().year() - 1);
    let actor =
        Actor::service_owner("studio").with_permission(Permission::PublishDecisionData);

    let outcome = EditEngine::new(&mut repository, registry, &associations)
        .handle(&actor, &key, form)
        .context("replay submission")?;

    match outcome {
        SubmissionOutcome::Saved { dataset } => {
            println!("Would save with status: {}", dataset.status);
            print_matrix(&dataset.routes);
        }
        SubmissionOutcome::Invalid { report } => {
            print_validation(&report);
        }
        SubmissionOutcome::Redisplay { routes } => {
            print_matrix(&routes);
        }
    }
    Ok(())
}

fn load_form(path: &Path) -> Result<DecisionDatasetForm> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read submission {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse submission {}", path.display()))
}
