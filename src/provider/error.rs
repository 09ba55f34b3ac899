//! Error types for the provider boundary.
//!
//! Both the search client and the cover fetcher speak HTTP to external
//! services; their failures share one taxonomy and are handled at the call
//! site, never retried.

use thiserror::Error;

/// Errors that can occur talking to the metadata provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout requesting {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} requesting {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body did not match the expected shape.
    #[error("unexpected response format from {url}: {source}")]
    UnexpectedFormat {
        /// The URL whose response failed to parse.
        url: String,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a format error from a body decode failure.
    pub fn unexpected_format(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::UnexpectedFormat {
            url: url.into(),
            source,
        }
    }

    /// Classifies a transport-level reqwest failure, separating timeouts
    /// from other network errors.
    pub fn from_transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::timeout(url)
        } else {
            Self::network(url, source)
        }
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because every
// variant requires the URL context that the source error does not carry.
// The helper constructors are the correct pattern here.
