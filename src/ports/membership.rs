#[mockall::automock]
#[async_trait::async_trait]
pub trait MembershipPort {
    /// Forward a member identifier to the external membership service
    ///
    /// Returns the raw upstream status and body; classifying them into a
    /// lookup outcome is the caller's job. An `Err` means the service could
    /// not be reached at all.
    async fn lookup(&self, mobile: &str) -> Result<WebhookReply, Error>;
}

/// Raw reply from the membership webhook, before classification
#[derive(Clone, Debug)]
pub struct WebhookReply {
    pub status: u16,
    pub body: String,
}

impl WebhookReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The service could not be reached (connection refused, DNS failure,
    /// timeout)
    #[error("membership service unreachable: {0:?}")]
    Unreachable(Box<dyn std::error::Error + Send + Sync>),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not
    /// part of the domain model, such as configuration or TLS setup errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
