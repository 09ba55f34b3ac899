//! Metadata provider boundary.
//!
//! This module exposes the [`SearchProvider`] trait that the library walk
//! depends on, plus the concrete Jikan implementation:
//!
//! - [`SearchProvider`] - async trait the orchestrator is written against
//! - [`JikanClient`] - Jikan v4 (MyAnimeList) keyword search
//! - [`ProviderError`] - shared failure taxonomy for provider HTTP traffic

mod error;
mod jikan;

pub use error::ProviderError;
pub use jikan::{
    JikanClient, Manga, MangaAuthor, MangaGenre, MangaImageSet, MangaImages, RESULT_LIMIT,
};

use async_trait::async_trait;

/// Keyword search against a metadata provider.
///
/// The walk holds a `&dyn SearchProvider`, so tests can substitute a stub
/// and alternative providers can slot in without touching the orchestrator.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Searches for `title`, returning up to [`RESULT_LIMIT`] candidates in
    /// the provider's popularity order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the provider cannot be reached or
    /// answers with something other than a well-formed result list.
    async fn search(&self, title: &str) -> Result<Vec<Manga>, ProviderError>;
}
