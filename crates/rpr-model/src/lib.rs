pub mod action;
pub mod actor;
pub mod dataset;

pub use action::{EditAction, ParseActionError};
pub use actor::{Actor, Permission};
pub use dataset::{
    DatasetKey, DatasetStatus, DecisionCountry, DecisionDataset, DecisionRoute, Decisions,
};
