#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod registry;

pub use crate::error::CountryError;
pub use crate::options::SelectOption;
pub use crate::registry::{Country, CountryRegistry};
