//! Fixed spacing between outbound provider calls.
//!
//! The provider enforces a blunt global rate limit, so a single timeline is
//! tracked: the first acquire proceeds immediately, every later acquire
//! sleeps out whatever remains of the configured delay. Not adaptive; a 429
//! gets the same spacing as a success.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Enforces a minimum delay between consecutive outbound requests.
#[derive(Debug)]
pub struct RequestPacer {
    /// Minimum time between requests.
    delay: Duration,

    /// Whether pacing is disabled (for `--rate-limit 0`).
    disabled: bool,

    /// Time of the last outbound request. `None` until the first call, so
    /// the first request is never delayed.
    last_request: Mutex<Option<Instant>>,
}

impl RequestPacer {
    /// Creates a pacer with the given minimum delay between requests.
    #[must_use]
    #[instrument(skip_all, fields(delay_ms = delay.as_millis()))]
    pub fn new(delay: Duration) -> Self {
        debug!("creating request pacer");
        Self {
            delay,
            disabled: false,
            last_request: Mutex::new(None),
        }
    }

    /// Creates a disabled pacer that applies no delays.
    ///
    /// Use this when `--rate-limit 0` is specified.
    #[must_use]
    #[instrument]
    pub fn disabled() -> Self {
        debug!("creating disabled request pacer");
        Self {
            delay: Duration::ZERO,
            disabled: true,
            last_request: Mutex::new(None),
        }
    }

    /// Returns whether pacing is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns the configured delay between requests.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits until the configured delay has elapsed since the previous
    /// outbound call, then claims the current slot.
    pub async fn acquire(&self) {
        if self.disabled {
            return;
        }

        let mut last_request = self.last_request.lock().await;

        if let Some(last) = *last_request {
            let elapsed = last.elapsed();
            if elapsed < self.delay {
                let wait = self.delay.saturating_sub(elapsed);
                debug!(wait_ms = wait.as_millis(), "applying request pacing delay");
                tokio::time::sleep(wait).await;
            }
        } else {
            debug!("first outbound request - no delay");
        }

        *last_request = Some(Instant::now());
    }
}
