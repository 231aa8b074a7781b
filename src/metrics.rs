// src/metrics.rs
use crate::verifier::VerifyError;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    pub attempts: AtomicU64,
    pub accepted: AtomicU64,
    pub rejected: AtomicU64,
    pub invalid_length: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, outcome: &Result<bool, VerifyError>) {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let counter = match outcome {
            Ok(true) => &self.accepted,
            Ok(false) => &self.rejected,
            Err(VerifyError::InvalidLength { .. }) => &self.invalid_length,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> String {
        format!(
            "attempts: {}, accepted: {}, rejected: {}, invalid_length: {}",
            self.attempts.load(Ordering::Relaxed),
            self.accepted.load(Ordering::Relaxed),
            self.rejected.load(Ordering::Relaxed),
            self.invalid_length.load(Ordering::Relaxed),
        )
    }
}
