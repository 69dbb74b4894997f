use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::ports::membership::MembershipPort;
use tower::Service;

use super::{DomainLogic, Error};

pub struct LookupMemberRequest {
    /// Raw identifier as supplied by the caller; trimmed before use
    pub mobile: String,
}

#[derive(Debug, PartialEq)]
pub struct LookupMemberResponse {
    /// Upstream membership payload, passed through verbatim
    ///
    /// Only the presence of the top-level `membershipSummary` field is
    /// checked; nested shapes are the upstream service's contract with the
    /// frontend.
    pub profile: serde_json::Value,
}

impl<M> Service<LookupMemberRequest> for DomainLogic<M>
where
    M: MembershipPort + Send + Sync + 'static,
{
    type Response = LookupMemberResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: LookupMemberRequest) -> Self::Future {
        let membership = self.membership.clone();
        Box::pin(async move {
            // Reject blank identifiers before any network round-trip
            let mobile = req.mobile.trim().to_owned();
            if mobile.is_empty() {
                return Err(Error::EmptyIdentifier);
            }

            let reply = membership.lookup(&mobile).await.map_err(|err| {
                tracing::error!(error = %err, "membership service unreachable");
                err
            })?;

            if !reply.is_success() {
                tracing::error!(status = reply.status, body = %reply.body, "membership service returned an error");
                return Err(Error::UpstreamStatus {
                    status: reply.status,
                });
            }

            if reply.body.trim().is_empty() {
                tracing::info!("membership service has no record for this identifier");
                return Err(Error::MemberNotFound);
            }

            let profile: serde_json::Value = serde_json::from_str(&reply.body).map_err(|err| {
                tracing::error!(error = %err, body = %reply.body, "failed to parse membership reply");
                Error::UpstreamMalformed
            })?;

            if profile.get("membershipSummary").is_none() {
                tracing::warn!("membership reply parsed but carries no membershipSummary");
                return Err(Error::SummaryMissing);
            }

            Ok(LookupMemberResponse { profile })
        })
    }
}
