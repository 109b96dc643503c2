//! One submission, end to end.
//!
//! A structural action transforms the in-memory matrix and redisplays the
//! edit view. A terminal action runs validation, then the authorization
//! guard, then writes through the repository with the status the action
//! targets. Validation failures stay inside [`SubmissionOutcome`]; only
//! authorization and lookup failures surface as errors.

use chrono::{DateTime, Datelike, Utc};
use tracing::{debug, info, warn};

use rpr_access::{AccessError, ProfessionAssociations, can_change_dataset, can_publish_dataset};
use rpr_countries::{CountryError, CountryRegistry};
use rpr_form::{DecisionDatasetForm, apply_action, parse_routes};
use rpr_model::{Actor, DatasetKey, DatasetStatus, DecisionDataset, DecisionRoute, EditAction};
use rpr_validate::{ValidationReport, Validator};

use crate::repository::DecisionDatasetRepository;

/// What one handled submission produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// A structural edit (or unrecognized action): re-render the edit view
    /// with these routes.
    Redisplay { routes: Vec<DecisionRoute> },
    /// A terminal action failed validation: re-render with positional
    /// errors.
    Invalid { report: ValidationReport },
    /// A terminal action passed validation and authorization; the dataset
    /// was written with its new status.
    Saved { dataset: DecisionDataset },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Country(#[from] CountryError),
}

/// Orchestrates the editing workflow over the external collaborators:
/// the dataset store, the country set and the profession associations.
pub struct EditEngine<'a, R> {
    repository: &'a mut R,
    countries: &'a CountryRegistry,
    associations: &'a dyn ProfessionAssociations,
}

impl<'a, R: DecisionDatasetRepository> EditEngine<'a, R> {
    pub fn new(
        repository: &'a mut R,
        countries: &'a CountryRegistry,
        associations: &'a dyn ProfessionAssociations,
    ) -> Self {
        Self {
            repository,
            countries,
            associations,
        }
    }

    /// Handle one submission for the dataset identified by `key`.
    pub fn handle(
        &mut self,
        actor: &Actor,
        key: &DatasetKey,
        form: &DecisionDatasetForm,
    ) -> Result<SubmissionOutcome, EngineError> {
        self.handle_at(actor, key, form, Utc::now())
    }

    /// [`EditEngine::handle`] with the clock supplied, for deterministic
    /// tests.
    pub fn handle_at(
        &mut self,
        actor: &Actor,
        key: &DatasetKey,
        form: &DecisionDatasetForm,
        now: DateTime<Utc>,
    ) -> Result<SubmissionOutcome, EngineError> {
        let action = match form.action.parse::<EditAction>() {
            Ok(action) => action,
            Err(error) => {
                // An action the mini-language does not know leaves the
                // structure untouched and just re-renders it.
                warn!(%error, "unrecognized edit action, redisplaying");
                let routes = parse_routes(form, self.countries)?;
                return Ok(SubmissionOutcome::Redisplay { routes });
            }
        };

        match action.target_status() {
            None => {
                debug!(%action, "applying structural edit");
                let routes = parse_routes(form, self.countries)?;
                Ok(SubmissionOutcome::Redisplay {
                    routes: apply_action(&routes, &action),
                })
            }
            Some(status) => self.persist(actor, key, form, action, status, now),
        }
    }

    fn persist(
        &mut self,
        actor: &Actor,
        key: &DatasetKey,
        form: &DecisionDatasetForm,
        action: EditAction,
        status: DatasetStatus,
        now: DateTime<Utc>,
    ) -> Result<SubmissionOutcome, EngineError> {
        let report = Validator::new().validate(form);
        if !report.is_valid() {
            debug!(errors = report.error_count(), "submission failed validation");
            return Ok(SubmissionOutcome::Invalid { report });
        }

        let existing = self.repository.find(key);
        can_change_dataset(
            actor,
            self.associations,
            &key.profession_id,
            &key.organisation_id,
            key.year,
            existing.is_some(),
            now.year(),
        )?;
        if action == EditAction::Publish {
            can_publish_dataset(actor)?;
        }

        let routes = parse_routes(form, self.countries)?;
        let dataset = DecisionDataset {
            profession_id: key.profession_id.clone(),
            organisation_id: key.organisation_id.clone(),
            year: key.year,
            status,
            routes,
            user_id: actor.id.clone(),
            created_at: existing.map_or(now, |dataset| dataset.created_at),
            updated_at: now,
        };
        self.repository.save(dataset.clone());
        info!(key = %key, status = %status, "dataset saved");

        Ok(SubmissionOutcome::Saved { dataset })
    }
}
