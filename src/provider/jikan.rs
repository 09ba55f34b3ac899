//! Jikan v4 search client - looks up manga metadata on MyAnimeList.
//!
//! The [`JikanClient`] calls the Jikan REST API keyword search and returns
//! the raw candidate records for the matcher to rank. Responses are modeled
//! with explicit optionality on every field the provider may omit; nothing
//! is defaulted at the parse layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::user_agent;

use super::{ProviderError, SearchProvider};

/// Default Jikan API base URL.
const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Maximum number of search results requested per query.
pub const RESULT_LIMIT: usize = 5;

/// Timeout for search requests; payloads are small JSON bodies.
const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

// ==================== Jikan API Response Types ====================

/// Top-level Jikan search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    /// Candidate list; absent when the provider has nothing to say.
    pub data: Option<Vec<Manga>>,
}

/// One search hit from the Jikan API.
#[derive(Debug, Clone, Deserialize)]
pub struct Manga {
    /// MyAnimeList id, kept for log correlation.
    pub mal_id: Option<u64>,
    /// Primary (romaji) title.
    pub title: Option<String>,
    /// English title, when the provider has one.
    pub title_english: Option<String>,
    /// Contributor credits; the provider does not distinguish roles.
    pub authors: Option<Vec<MangaAuthor>>,
    /// Synopsis text.
    pub synopsis: Option<String>,
    /// Genre tags, in provider order.
    pub genres: Option<Vec<MangaGenre>>,
    /// Publication status label drawn from a small fixed vocabulary.
    pub status: Option<String>,
    /// Cover image URLs at varying resolutions.
    pub images: Option<MangaImages>,
}

/// A contributor entry from the Jikan response.
#[derive(Debug, Clone, Deserialize)]
pub struct MangaAuthor {
    /// Contributor name as the provider renders it.
    pub name: String,
}

/// A genre entry from the Jikan response.
#[derive(Debug, Clone, Deserialize)]
pub struct MangaGenre {
    /// Genre name.
    pub name: String,
}

/// Image URL sets keyed by format.
#[derive(Debug, Clone, Deserialize)]
pub struct MangaImages {
    /// JPEG renditions.
    pub jpg: Option<MangaImageSet>,
}

/// Image URLs for one format at the resolutions Jikan serves.
#[derive(Debug, Clone, Deserialize)]
pub struct MangaImageSet {
    /// Standard resolution.
    pub image_url: Option<String>,
    /// Large resolution, preferred for covers.
    pub large_image_url: Option<String>,
}

// ==================== JikanClient ====================

/// Searches manga metadata via the Jikan REST API.
///
/// The client queries `{base}/manga` with the folder name as keyword,
/// capping results at [`RESULT_LIMIT`] and letting the provider order them
/// by popularity so the first hit is the safest fallback.
///
/// Designed to be created once and reused; connection pooling is handled by
/// the inner reqwest client.
#[derive(Debug, Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new()
    }
}

impl JikanClient {
    /// Creates a new client against the public Jikan API.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .user_agent(user_agent::default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Searches the provider for `title`, returning up to [`RESULT_LIMIT`]
    /// candidates in the provider's popularity order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, timeout, non-2xx
    /// status, or an unparseable body.
    #[instrument(skip(self), fields(provider = "jikan"))]
    pub async fn search(&self, title: &str) -> Result<Vec<Manga>, ProviderError> {
        let url = format!("{}/manga", self.base_url);
        let limit = RESULT_LIMIT.to_string();

        debug!(api_url = %url, "Calling Jikan search API");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", title),
                ("limit", limit.as_str()),
                ("order_by", "popularity"),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::from_transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::http_status(&url, status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::unexpected_format(&url, e))?;

        let hits = body.data.unwrap_or_default();
        if hits.is_empty() {
            warn!("Jikan search returned no candidates");
        } else {
            debug!(hits = hits.len(), "Jikan search returned candidates");
        }
        Ok(hits)
    }
}

#[async_trait]
impl SearchProvider for JikanClient {
    fn name(&self) -> &'static str {
        "jikan"
    }

    async fn search(&self, title: &str) -> Result<Vec<Manga>, ProviderError> {
        JikanClient::search(self, title).await
    }
}
