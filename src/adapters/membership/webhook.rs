use crate::ports::membership::{Error, MembershipPort, WebhookReply};
use std::time::Duration;

/// Membership adapter backed by an external webhook
///
/// Sends the identifier as `{"mobile": "..."}` and hands the raw status and
/// body back to the caller. The request timeout is bounded at construction
/// time; hitting it surfaces as [`Error::Unreachable`], same as any other
/// transport failure.
#[derive(Clone, Debug)]
pub struct WebhookMembership {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookMembership {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Adapter(Box::new(err)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait::async_trait]
impl MembershipPort for WebhookMembership {
    async fn lookup(&self, mobile: &str) -> Result<WebhookReply, Error> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "mobile": mobile }))
            .send()
            .await
            .map_err(|err| Error::Unreachable(Box::new(err)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| Error::Unreachable(Box::new(err)))?;

        Ok(WebhookReply { status, body })
    }
}
