//! Bounded retry for idempotent reads.
//!
//! Controllers wrap read-only service calls in `with_read_retry`. Mutations are never
//! passed through here.

use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Maximum attempts, including the first.
pub const MAX_READ_ATTEMPTS: u32 = 3;

const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Runs `read` until it succeeds, fails with a non-transient error, or runs out of
/// attempts.
///
/// Only errors for which `AppError::is_transient` holds are retried, with a short
/// linear backoff between attempts.
///
/// # Returns
/// - `Ok(T)` - First successful result
/// - `Err(AppError)` - First non-transient error, or the last transient one
pub async fn with_read_retry<T, F, Fut>(mut read: F) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;

    loop {
        match read().await {
            Err(err) if err.is_transient() && attempt < MAX_READ_ATTEMPTS => {
                tracing::warn!(
                    "Transient error on read attempt {}/{}: {}",
                    attempt,
                    MAX_READ_ATTEMPTS,
                    err
                );
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}
