//! Cover image resolution and download.
//!
//! A search hit carries image URLs at several resolutions;
//! [`resolve_cover_url`] prefers the large rendition and falls back to the
//! standard one. [`CoverClient`] performs the single GET and returns the
//! body verbatim for the sidecar writer.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::provider::{Manga, ProviderError};
use crate::user_agent;

/// Timeout for cover downloads; images are larger than search payloads.
const COVER_TIMEOUT: Duration = Duration::from_secs(15);

/// Picks the cover URL from a search hit, preferring the large rendition.
///
/// Returns `None` when the hit carries no usable image URL (absent or
/// empty fields), meaning the cover step should be skipped.
#[must_use]
pub fn resolve_cover_url(manga: &Manga) -> Option<&str> {
    let jpg = manga.images.as_ref()?.jpg.as_ref()?;
    jpg.large_image_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .or_else(|| jpg.image_url.as_deref().filter(|url| !url.is_empty()))
}

/// HTTP client for downloading cover images.
///
/// Created once and reused across the walk so connection pooling applies.
#[derive(Debug, Clone)]
pub struct CoverClient {
    client: Client,
}

impl Default for CoverClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CoverClient {
    /// Creates a new cover client with the download timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(COVER_TIMEOUT)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads a cover image, returning the raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, timeout, or a
    /// non-2xx status.
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        debug!("Downloading cover image");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http_status(url, status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_transport(url, e))?;

        debug!(bytes = bytes.len(), "Cover downloaded");
        Ok(bytes.to_vec())
    }
}
