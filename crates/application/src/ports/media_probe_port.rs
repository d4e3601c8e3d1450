//! Media probe port - Interface for classifying remote attachments

use async_trait::async_trait;
use domain::MediaCategory;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for determining the category of a hosted media file
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MediaProbePort: Send + Sync {
    /// Fetch the resource at `url` and classify its content
    ///
    /// Unrecognized content is `MediaCategory::File`; only transport
    /// failures are errors.
    async fn probe(&self, url: &str) -> Result<MediaCategory, ApplicationError>;
}
