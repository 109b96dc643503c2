pub mod report;
pub mod validator;

pub use crate::report::{FieldLocation, ValidationError, ValidationReport};
pub use crate::validator::Validator;
