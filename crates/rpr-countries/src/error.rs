#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountryError {
    #[error("country not found: {identifier}")]
    NotFound { identifier: String },

    #[error("failed to parse country reference data: {message}")]
    Data { message: String },
}

impl CountryError {
    pub(crate) fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }
}
