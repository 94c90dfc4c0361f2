//! Platform-aware deadline for futures.
//!
//! Uses `tokio::time::sleep` on native targets and `gloo_timers` in the browser,
//! where no tokio timer driver exists.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

/// The deadline passed before the future completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed(pub Duration);

impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "deadline of {:?} elapsed", self.0)
    }
}

impl std::error::Error for Elapsed {}

/// Run `fut` to completion unless `duration` passes first.
pub async fn with_timeout<F: Future>(duration: Duration, fut: F) -> Result<F::Output, Elapsed> {
    let fut = pin!(fut);
    let delay = pin!(sleep(duration));
    match select(fut, delay).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(Elapsed(duration)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completes_before_deadline() {
        let out = with_timeout(Duration::from_secs(5), async { 42 }).await;
        assert_eq!(out, Ok(42));
    }

    #[tokio::test]
    async fn test_pending_future_times_out() {
        let limit = Duration::from_millis(20);
        let out = with_timeout(limit, std::future::pending::<()>()).await;
        assert_eq!(out, Err(Elapsed(limit)));
    }
}
