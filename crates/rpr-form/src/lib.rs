pub mod dto;
pub mod matrix;
pub mod mutate;
pub mod value;

pub use crate::dto::DecisionDatasetForm;
pub use crate::matrix::{MAX_COUNTRIES_PER_ROUTE, MAX_ROUTES, parse_routes};
pub use crate::mutate::apply_action;
pub use crate::value::parse_decision_value;
