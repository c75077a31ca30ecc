//! Simulated "typing" delay before a reply appears.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Delay model: `base + per_char * chars`, capped at `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    pub base: Duration,
    pub per_char: Duration,
    pub max: Duration,
}

impl Default for TypingDelay {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(300),
            per_char: Duration::from_millis(20),
            max: Duration::from_millis(1500),
        }
    }
}

/// Outcome of waiting out a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    Cancelled,
}

impl TypingDelay {
    pub const NONE: Self = Self {
        base: Duration::ZERO,
        per_char: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub fn for_input(&self, input: &str) -> Duration {
        let chars = u32::try_from(input.chars().count()).unwrap_or(u32::MAX);
        self.per_char
            .checked_mul(chars)
            .and_then(|d| d.checked_add(self.base))
            .map_or(self.max, |d| d.min(self.max))
    }

    /// Sleeps for the delay computed from `input` unless `token` fires first.
    pub async fn wait(&self, input: &str, token: &CancellationToken) -> Delivery {
        let delay = self.for_input(input);
        if token.is_cancelled() {
            return Delivery::Cancelled;
        }

        tokio::select! {
            () = token.cancelled() => {
                debug!(?delay, "pending reply cancelled");
                Delivery::Cancelled
            }
            () = tokio::time::sleep(delay) => Delivery::Delivered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_grows_with_input_length() {
        let typing = TypingDelay::default();
        assert_eq!(typing.for_input(""), Duration::from_millis(300));
        assert_eq!(typing.for_input("hello"), Duration::from_millis(400));
        assert!(typing.for_input("hello there") > typing.for_input("hello"));
    }

    #[test]
    fn test_delay_is_capped() {
        let typing = TypingDelay::default();
        let long = "x".repeat(10_000);
        assert_eq!(typing.for_input(&long), Duration::from_millis(1500));
    }

    #[test]
    fn test_none_is_instant() {
        assert_eq!(TypingDelay::NONE.for_input("anything at all"), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_delivers_after_delay() {
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();

        let outcome = TypingDelay::default().wait("hello", &token).await;

        assert_eq!(outcome, Delivery::Delivered);
        assert_eq!(start.elapsed(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_cancelled_mid_delay() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            canceller.cancel();
        });

        let start = tokio::time::Instant::now();
        let outcome = TypingDelay::default().wait("hello", &token).await;

        assert_eq!(outcome, Delivery::Cancelled);
        assert!(start.elapsed() < Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_wait_already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        let outcome = TypingDelay::default().wait("hello", &token).await;
        assert_eq!(outcome, Delivery::Cancelled);
    }
}
