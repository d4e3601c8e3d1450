//! Message gateway port - Interface for the messaging provider

use async_trait::async_trait;
use domain::{ProviderMessage, ProviderReply, ProviderResponse, Recipient};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for delivering a single message through the provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessageGatewayPort: Send + Sync {
    /// Post one message to a recipient and return the provider's response body
    async fn deliver(
        &self,
        recipient: &Recipient,
        message: &ProviderMessage,
    ) -> Result<ProviderResponse, ApplicationError>;

    /// Post one message and return the provider's body without parsing it
    async fn deliver_raw(
        &self,
        recipient: &Recipient,
        message: &ProviderMessage,
    ) -> Result<ProviderReply, ApplicationError>;
}
