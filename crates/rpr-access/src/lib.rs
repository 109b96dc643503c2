pub mod error;
pub mod guard;

pub use crate::error::AccessError;
pub use crate::guard::{
    FIRST_DATASET_YEAR, ProfessionAssociations, allowed_years, can_change_dataset,
    can_publish_dataset,
};
