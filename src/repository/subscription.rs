//! Live query handle.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::mpsc;

use crate::async_result::AsyncResult;

/// Receiving end of a live query.
///
/// Dropping the subscription cancels it: the producer observes the closed
/// channel and stops re-evaluating the query.
pub struct Subscription<T> {
    receiver: mpsc::UnboundedReceiver<AsyncResult<T>>,
}

/// Producing end of a live query.
pub struct SubscriptionSender<T> {
    sender: mpsc::UnboundedSender<AsyncResult<T>>,
}

impl<T: Send + 'static> Subscription<T> {
    /// Create a connected sender/subscription pair.
    pub fn channel() -> (SubscriptionSender<T>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (SubscriptionSender { sender }, Self { receiver })
    }

    /// A subscription that could not be established: `Pending`, then the
    /// failure, then end of stream.
    pub fn failed(message: impl Into<String>) -> Self {
        let (sender, subscription) = Self::channel();
        sender.pending();
        sender.failure(message);
        subscription
    }

    /// Wait for the next value. `None` once the producer is gone.
    pub async fn next(&mut self) -> Option<AsyncResult<T>> {
        self.receiver.recv().await
    }
}

impl<T> Stream for Subscription<T> {
    type Item = AsyncResult<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl<T> SubscriptionSender<T> {
    /// Send a raw value. Returns false once the subscriber has gone away.
    pub fn emit(&self, value: AsyncResult<T>) -> bool {
        self.sender.send(value).is_ok()
    }

    pub fn pending(&self) -> bool {
        self.emit(AsyncResult::Pending)
    }

    pub fn success(&self, value: T) -> bool {
        self.emit(AsyncResult::Success(value))
    }

    pub fn failure(&self, message: impl Into<String>) -> bool {
        self.emit(AsyncResult::Failure(message.into()))
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Resolves once the subscriber has dropped its end.
    pub async fn closed(&self) {
        self.sender.closed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_subscription_reports_pending_then_failure() {
        let mut subscription = Subscription::<Vec<u8>>::failed("offline");
        assert_eq!(subscription.next().await, Some(AsyncResult::Pending));
        assert_eq!(
            subscription.next().await,
            Some(AsyncResult::Failure("offline".to_string()))
        );
        assert_eq!(subscription.next().await, None);
    }

    #[tokio::test]
    async fn dropping_the_subscription_closes_the_sender() {
        let (sender, subscription) = Subscription::<u8>::channel();
        assert!(!sender.is_closed());
        drop(subscription);
        assert!(sender.is_closed());
        assert!(!sender.success(1));
    }
}
