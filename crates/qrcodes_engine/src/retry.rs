use std::time::Duration;

use admin_logging::{admin_debug, admin_warn};

use crate::{FetchError, FetchSettings, Fetcher, QrCodeRecord};

/// A fetch that exhausted its attempts or hit a permanent failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryFailure {
    pub error: FetchError,
    pub attempts: u32,
}

/// Delay before retry number `attempt` (1 = first retry), doubling each time
/// and capped at `max_backoff`.
pub fn backoff_delay(settings: &FetchSettings, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    settings
        .initial_backoff
        .saturating_mul(1u32 << exponent)
        .min(settings.max_backoff)
}

/// Runs `fetcher` until it succeeds, fails permanently, or runs out of attempts.
pub async fn fetch_with_retry(
    fetcher: &dyn Fetcher,
    url: &str,
    settings: &FetchSettings,
) -> Result<Vec<QrCodeRecord>, RetryFailure> {
    let max_attempts = settings.max_attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match fetcher.fetch_codes(url).await {
            Ok(records) => {
                admin_debug!("Fetched {} codes on attempt {}", records.len(), attempt);
                return Ok(records);
            }
            Err(error) if error.kind.is_transient() && attempt < max_attempts => {
                let delay = backoff_delay(settings, attempt);
                admin_warn!(
                    "Fetch attempt {}/{} failed ({}); retrying in {:?}",
                    attempt,
                    max_attempts,
                    error,
                    delay
                );
                tokio::time::sleep(delay).await;
            }
            Err(error) => {
                return Err(RetryFailure {
                    error,
                    attempts: attempt,
                })
            }
        }
    }
}
