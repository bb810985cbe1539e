//! Async utilities for cancellation-aware futures.
//!
//! Provides the `OrCancelExt` trait, which races a future against a
//! tokio-util `CancellationToken` and, optionally, a deadline.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Error returned when a future is cancelled.
#[derive(Debug, PartialEq, Eq)]
pub enum CancelErr {
    Cancelled,
}

/// Error returned by [`OrCancelExt::or_cancel_within`].
#[derive(Debug, PartialEq, Eq)]
pub enum DeadlineErr {
    /// The token fired before the future settled.
    Cancelled,
    /// The future did not settle within the given limit.
    TimedOut(Duration),
}

impl From<CancelErr> for DeadlineErr {
    fn from(err: CancelErr) -> Self {
        match err {
            CancelErr::Cancelled => Self::Cancelled,
        }
    }
}

/// Extension trait for making futures cancellable.
///
/// Cancellation wins ties: a token that is already cancelled short-circuits
/// even a future that would be ready on first poll.
#[async_trait]
pub trait OrCancelExt: Sized {
    type Output;

    /// Race this future against the cancellation token.
    async fn or_cancel(self, token: &CancellationToken) -> Result<Self::Output, CancelErr>;

    /// Race this future against the cancellation token and a deadline.
    async fn or_cancel_within(
        self,
        token: &CancellationToken,
        limit: Duration,
    ) -> Result<Self::Output, DeadlineErr>;
}

#[async_trait]
impl<F> OrCancelExt for F
where
    F: Future + Send,
    F::Output: Send,
{
    type Output = F::Output;

    async fn or_cancel(self, token: &CancellationToken) -> Result<Self::Output, CancelErr> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(CancelErr::Cancelled),
            res = self => Ok(res),
        }
    }

    async fn or_cancel_within(
        self,
        token: &CancellationToken,
        limit: Duration,
    ) -> Result<Self::Output, DeadlineErr> {
        match tokio::time::timeout(limit, self.or_cancel(token)).await {
            Ok(res) => res.map_err(DeadlineErr::from),
            Err(_) => Err(DeadlineErr::TimedOut(limit)),
        }
    }
}
