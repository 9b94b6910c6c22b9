//! Randomized pauses between result page requests.
//!
//! Spacing requests by an unpredictable number of seconds makes a paginated
//! search look less like automated traffic. This is a heuristic, not a
//! guarantee against bot detection.

use crate::config::SearchConfig;
use rand::Rng;
use std::time::Duration;

/// Pauses the search between two page fetches.
pub trait Pacer: Send + Sync {
    /// Wait before the next page is requested.
    fn wait(&self) -> impl std::future::Future<Output = ()> + Send;
}

/// [`Pacer`] that sleeps a whole number of seconds drawn uniformly from
/// `[min_secs, max_secs)`.
#[derive(Debug, Clone, Copy)]
pub struct RandomPacer {
    min_secs: u64,
    max_secs: u64,
}

impl RandomPacer {
    /// Create a pacer over `[min_secs, max_secs)`.
    ///
    /// An empty range collapses to a fixed `min_secs` pause.
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self { min_secs, max_secs }
    }

    /// Create a pacer from [`SearchConfig::pacing_secs`].
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.pacing_secs.0, config.pacing_secs.1)
    }

    /// Draw the next pause length.
    pub fn next_delay(&self) -> Duration {
        if self.min_secs >= self.max_secs {
            return Duration::from_secs(self.min_secs);
        }
        let secs = rand::thread_rng().gen_range(self.min_secs..self.max_secs);
        Duration::from_secs(secs)
    }
}

impl Pacer for RandomPacer {
    async fn wait(&self) {
        let delay = self.next_delay();
        tracing::debug!(secs = delay.as_secs(), "pausing before next page");
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_delays_stay_within_bounds() {
        let pacer = RandomPacer::from_config(&SearchConfig::default());
        for _ in 0..200 {
            let secs = pacer.next_delay().as_secs();
            assert!((15..40).contains(&secs), "delay {secs}s out of range");
        }
    }

    #[test]
    fn single_value_range_is_fixed() {
        let pacer = RandomPacer::new(7, 8);
        assert_eq!(pacer.next_delay(), Duration::from_secs(7));
    }

    #[test]
    fn empty_range_collapses_to_min() {
        let pacer = RandomPacer::new(3, 3);
        assert_eq!(pacer.next_delay(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn zero_range_wait_returns_promptly() {
        let pacer = RandomPacer::new(0, 1);
        let started = std::time::Instant::now();
        pacer.wait().await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RandomPacer>();
    }
}
