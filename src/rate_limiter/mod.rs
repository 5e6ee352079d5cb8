use std::time::Duration;
use tokio::time::sleep;

/// Spaces out API requests; the first one goes through immediately.
pub struct RateLimiter {
    delay: Duration,
    requests_sent: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            requests_sent: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.requests_sent > 0 {
            sleep(self.delay).await;
        }
        self.requests_sent += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_request_is_not_delayed() {
        let mut limiter = RateLimiter::new(60_000);
        let before = tokio::time::Instant::now();
        limiter.wait().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn subsequent_requests_are_spaced_by_the_delay() {
        let mut limiter = RateLimiter::new(1000);
        limiter.wait().await;

        let before = tokio::time::Instant::now();
        limiter.wait().await;
        assert_eq!(before.elapsed(), Duration::from_millis(1000));
    }
}
