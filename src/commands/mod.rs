use std::sync::Arc;

pub mod lookup_member;

pub struct DomainLogic<M> {
    membership: Arc<M>,
}

impl<M> DomainLogic<M> {
    pub fn new(membership: Arc<M>) -> Self {
        Self { membership }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller-supplied identifier is empty after trimming
    #[error("empty identifier")]
    EmptyIdentifier,

    /// The membership service answered but holds no record for the identifier
    #[error("no member found")]
    MemberNotFound,

    /// The reply parsed as JSON but carries no top-level membership summary
    ///
    /// The HTTP boundary surfaces this like [`Error::MemberNotFound`], since
    /// the upstream service reports absence this way too. Keeping a separate
    /// variant keeps the shape mismatch visible in diagnostics.
    #[error("membership summary missing from reply")]
    SummaryMissing,

    /// The membership service answered with a non-success status
    #[error("membership service returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The membership service answered with a body that is not valid JSON
    #[error("membership service returned an unparseable body")]
    UpstreamMalformed,

    #[error("membership port error: {0:?}")]
    Membership(#[from] crate::ports::membership::Error),
}
