use std::fmt;
use std::str::FromStr;

use crate::dataset::DatasetStatus;

/// One edit action submitted with a dataset form.
///
/// The wire format is `command[:arg[:arg]]` with 1-based indices as authored
/// by the edit view; indices are converted to 0-based at parse time and all
/// later code indexes arrays directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Append an empty route.
    AddRoute,
    /// Remove the route at `route`.
    RemoveRoute { route: usize },
    /// Append an empty country row to the route at `route`.
    AddCountry { route: usize },
    /// Remove the country row at `country` from the route at `route`.
    RemoveCountry { route: usize, country: usize },
    /// Persist as a draft.
    Save,
    /// Persist and hand off to central review.
    Submit,
    /// Persist and publish.
    Publish,
}

impl EditAction {
    /// Structural actions transform the in-memory matrix and redisplay the
    /// edit view; terminal actions run validation and reach the store.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            EditAction::AddRoute
                | EditAction::RemoveRoute { .. }
                | EditAction::AddCountry { .. }
                | EditAction::RemoveCountry { .. }
        )
    }

    /// The status a terminal action persists with, `None` for structural
    /// actions.
    pub fn target_status(self) -> Option<DatasetStatus> {
        match self {
            EditAction::Save => Some(DatasetStatus::Draft),
            EditAction::Submit => Some(DatasetStatus::Submitted),
            EditAction::Publish => Some(DatasetStatus::Live),
            _ => None,
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditAction::AddRoute => write!(f, "addRoute"),
            EditAction::RemoveRoute { route } => write!(f, "removeRoute:{}", route + 1),
            EditAction::AddCountry { route } => write!(f, "addCountry:{}", route + 1),
            EditAction::RemoveCountry { route, country } => {
                write!(f, "removeCountry:{}:{}", route + 1, country + 1)
            }
            EditAction::Save => write!(f, "save"),
            EditAction::Submit => write!(f, "submit"),
            EditAction::Publish => write!(f, "publish"),
        }
    }
}

/// Failure to parse an action token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("unrecognized action: {0}")]
    Unrecognized(String),
    #[error("action {action} expects {expected} index argument(s)")]
    WrongArity { action: String, expected: usize },
    #[error("invalid index in action {action}: {index}")]
    InvalidIndex { action: String, index: String },
}

impl FromStr for EditAction {
    type Err = ParseActionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut parts = token.split(':');
        let command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let expect_arity = |expected: usize| -> Result<(), ParseActionError> {
            if args.len() == expected {
                Ok(())
            } else {
                Err(ParseActionError::WrongArity {
                    action: command.to_string(),
                    expected,
                })
            }
        };

        match command {
            "addRoute" => {
                expect_arity(0)?;
                Ok(EditAction::AddRoute)
            }
            "removeRoute" => {
                expect_arity(1)?;
                Ok(EditAction::RemoveRoute {
                    route: parse_index(command, args[0])?,
                })
            }
            "addCountry" => {
                expect_arity(1)?;
                Ok(EditAction::AddCountry {
                    route: parse_index(command, args[0])?,
                })
            }
            "removeCountry" => {
                expect_arity(2)?;
                Ok(EditAction::RemoveCountry {
                    route: parse_index(command, args[0])?,
                    country: parse_index(command, args[1])?,
                })
            }
            "save" => {
                expect_arity(0)?;
                Ok(EditAction::Save)
            }
            "submit" => {
                expect_arity(0)?;
                Ok(EditAction::Submit)
            }
            "publish" => {
                expect_arity(0)?;
                Ok(EditAction::Publish)
            }
            other => Err(ParseActionError::Unrecognized(other.to_string())),
        }
    }
}

/// Parse a 1-based wire index into a 0-based array index.
fn parse_index(action: &str, raw: &str) -> Result<usize, ParseActionError> {
    let invalid = || ParseActionError::InvalidIndex {
        action: action.to_string(),
        index: raw.to_string(),
    };
    let position: usize = raw.parse().map_err(|_| invalid())?;
    position.checked_sub(1).ok_or_else(invalid)
}
