/// Guard failures, kept distinct so the two modes can be messaged and
/// tested separately: `Unauthorized` is a role/permission problem,
/// `BadRequest` a profession/organisation/year mismatch on creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("not allowed to change decision data for this organisation")]
    Unauthorized,

    #[error("bad request: {reason}")]
    BadRequest { reason: String },
}

impl AccessError {
    pub(crate) fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }
}
