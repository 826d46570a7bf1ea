use std::{
    thread,
    time::{Duration, Instant},
};

use thiserror::Error;

/// Slowest accepted refill rate: one request every 100 seconds.
pub const MIN_RATE_PER_SEC: f64 = 0.01;

#[derive(Debug, Error, PartialEq)]
#[error("Rate must be a number of at least 0.01 requests per second, got {0}")]
pub struct InvalidRate(pub f64);

/// Throughput policy applied after every match detail request.
pub trait RateLimiter {
    fn throttle(&mut self);
}

/// Sleeps a constant interval after each request.
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl RateLimiter for FixedDelay {
    fn throttle(&mut self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Allows bursts up to `capacity` requests, refilled continuously at `refill_per_sec`.
pub struct TokenBucket {
    capacity: f64,
    refill_per_sec: f64,
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    pub fn new(capacity: u32, refill_per_sec: f64) -> Result<Self, InvalidRate> {
        if !refill_per_sec.is_finite() || refill_per_sec < MIN_RATE_PER_SEC {
            return Err(InvalidRate(refill_per_sec));
        }
        let capacity = f64::from(capacity.max(1));
        Ok(Self {
            capacity,
            refill_per_sec,
            tokens: capacity,
            last_refill: Instant::now(),
        })
    }

    /// Bucket with a burst of one, i.e. evenly spaced requests.
    pub fn per_second(rate: f64) -> Result<Self, InvalidRate> {
        Self::new(1, rate)
    }

    /// Takes one token at `now` and returns how long the caller has to wait for it.
    fn reserve(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.refill_per_sec).min(self.capacity);
        self.last_refill = now;

        self.tokens -= 1.0;
        if self.tokens >= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(-self.tokens / self.refill_per_sec).unwrap_or(Duration::MAX)
        }
    }
}

impl RateLimiter for TokenBucket {
    fn throttle(&mut self) {
        let wait = self.reserve(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}

/// No pause at all; for offline runs and tests.
pub struct Unlimited;

impl RateLimiter for Unlimited {
    fn throttle(&mut self) {}
}
