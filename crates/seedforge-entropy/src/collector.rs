//! Movement-gated entropy collection and final seed mixing.
//!
//! The collector owns one [`EntropyPool`] for its lifetime and applies
//! a movement-gating policy to incoming pointer samples: micro-jitter
//! and duplicate polling events are dropped, deliberate motion is
//! accepted. Once the pool is full, the collected samples are mixed
//! with fresh OS randomness into a 32-byte seed.

use rand::rngs::OsRng;
use rand::RngCore;

use seedforge_primitives::hash::keccak256;

use crate::error::EntropyError;
use crate::pool::{EntropyPool, Sample};

/// Number of accepted samples required before the pool is complete.
pub const POOL_SIZE: usize = 2000;

/// Minimum pixel movement on either axis for a sample to be accepted.
pub const MIN_MOVEMENT_THRESHOLD: i32 = 5;

/// Gates pointer samples into an entropy pool and mixes the final seed.
///
/// Explicitly constructed and owned by the session layer; exactly one
/// collector writes to a pool for that pool's entire lifetime. All
/// methods are synchronous and run on the caller's thread.
#[derive(Debug, Default)]
pub struct EntropyCollector {
    pool: EntropyPool,
    completed: bool,
    last_position: Option<(i32, i32)>,
}

impl EntropyCollector {
    /// Create a collector with an empty pool.
    pub fn new() -> Self {
        EntropyCollector {
            pool: EntropyPool::new(),
            completed: false,
            last_position: None,
        }
    }

    /// Feed one pointer sample and return collection progress (0..=100).
    ///
    /// The first sample is always accepted. Subsequent samples are
    /// rejected only when movement on *both* axes stays under
    /// [`MIN_MOVEMENT_THRESHOLD`]; reaching the threshold on either
    /// axis accepts the sample, so deliberate diagonal motion counts
    /// even if one axis barely moves. Rejected samples leave the pool
    /// and last position untouched. Once the pool is full this is a
    /// no-op returning 100.
    pub fn add_event(&mut self, x: i32, y: i32, timestamp: f64) -> u8 {
        if self.completed {
            return 100;
        }

        if let Some((last_x, last_y)) = self.last_position {
            let diff_x = (x - last_x).abs();
            let diff_y = (y - last_y).abs();
            if diff_x < MIN_MOVEMENT_THRESHOLD && diff_y < MIN_MOVEMENT_THRESHOLD {
                // Movement too small: high-frequency polling duplicate
                // or micro-jitter.
                return self.progress();
            }
        }

        self.last_position = Some((x, y));
        self.pool.push(Sample { x, y, captured_at: timestamp });

        if self.pool.len() >= POOL_SIZE {
            self.completed = true;
            log::debug!("entropy pool complete: {} samples", self.pool.len());
        }

        self.progress()
    }

    /// Collection progress as a percentage, 0..=100.
    ///
    /// Monotonically non-decreasing for the collector's lifetime until
    /// [`reset`](Self::reset) is called.
    pub fn progress(&self) -> u8 {
        let pct = self.pool.len() * 100 / POOL_SIZE;
        pct.min(100) as u8
    }

    /// Whether the pool has reached capacity.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Number of samples accepted so far.
    pub fn sample_count(&self) -> usize {
        self.pool.len()
    }

    /// Mix the completed pool with fresh OS randomness into a 32-byte seed.
    ///
    /// Computes `keccak256(keccak256(pool bytes) || 32 OsRng bytes)`.
    /// Fresh randomness is drawn on every call, so two calls on the
    /// same completed pool yield different seeds; the mix is a
    /// deliberate defense-in-depth step, not a pure function of the
    /// pool. Fails with [`EntropyError::IncompleteEntropy`] before the
    /// pool is full rather than returning a weak value.
    pub fn final_entropy(&self) -> Result<[u8; 32], EntropyError> {
        if !self.completed {
            return Err(EntropyError::IncompleteEntropy {
                got: self.pool.len(),
                needed: POOL_SIZE,
            });
        }

        let mouse_hash = keccak256(&self.pool.as_bytes());

        let mut random_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut random_bytes);

        let mut mix = Vec::with_capacity(64);
        mix.extend_from_slice(&mouse_hash);
        mix.extend_from_slice(&random_bytes);

        Ok(keccak256(&mix))
    }

    /// Return the collector to its exact construction-time state.
    ///
    /// Callable at any time, including mid-collection.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.completed = false;
        self.last_position = None;
        log::debug!("entropy collector reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a collector to completion with samples spaced past the
    /// movement threshold.
    fn fill_collector(collector: &mut EntropyCollector) {
        let mut i = 0i32;
        while !collector.is_complete() {
            collector.add_event(i * 10, i * 10, i as f64);
            i += 1;
        }
    }

    #[test]
    fn first_sample_always_accepted() {
        let mut collector = EntropyCollector::new();
        collector.add_event(0, 0, 1.0);
        assert_eq!(collector.sample_count(), 1);
    }

    #[test]
    fn small_movement_on_both_axes_rejected() {
        let mut collector = EntropyCollector::new();
        collector.add_event(100, 100, 1.0);
        let progress = collector.add_event(104, 104, 2.0);
        assert_eq!(collector.sample_count(), 1);
        assert_eq!(progress, collector.progress());
    }

    #[test]
    fn threshold_on_either_axis_accepts() {
        // The gate is disjunctive: one axis reaching 5px is enough.
        let mut collector = EntropyCollector::new();
        collector.add_event(100, 100, 1.0);
        collector.add_event(105, 100, 2.0); // x moves, y still
        assert_eq!(collector.sample_count(), 2);
        collector.add_event(105, 105, 3.0); // y moves, x still
        assert_eq!(collector.sample_count(), 3);
        collector.add_event(109, 101, 4.0); // both under threshold
        assert_eq!(collector.sample_count(), 3);
    }

    #[test]
    fn rejection_leaves_last_position_unchanged() {
        let mut collector = EntropyCollector::new();
        collector.add_event(100, 100, 1.0);
        // Two 4px steps in the same direction: each is rejected against
        // the last *accepted* position, so an 8px cumulative drift from
        // (100,100) then registers.
        collector.add_event(104, 100, 2.0);
        assert_eq!(collector.sample_count(), 1);
        collector.add_event(108, 100, 3.0);
        assert_eq!(collector.sample_count(), 2);
    }

    #[test]
    fn progress_reaches_100_only_when_full() {
        let mut collector = EntropyCollector::new();
        let mut last_progress = 0u8;
        for i in 0..(POOL_SIZE as i32) {
            let progress = collector.add_event(i * 10, 0, i as f64);
            assert!(progress >= last_progress);
            last_progress = progress;
            if (i as usize) < POOL_SIZE - 1 {
                assert!(progress < 100);
            }
        }
        assert_eq!(last_progress, 100);
        assert!(collector.is_complete());
    }

    #[test]
    fn completed_collector_ignores_further_events() {
        let mut collector = EntropyCollector::new();
        fill_collector(&mut collector);
        let count = collector.sample_count();
        assert_eq!(collector.add_event(9999, 9999, 1e9), 100);
        assert_eq!(collector.sample_count(), count);
    }

    #[test]
    fn final_entropy_requires_completion() {
        let collector = EntropyCollector::new();
        assert!(matches!(
            collector.final_entropy(),
            Err(EntropyError::IncompleteEntropy { got: 0, needed: POOL_SIZE })
        ));
    }

    #[test]
    fn final_entropy_redraws_randomness() {
        let mut collector = EntropyCollector::new();
        fill_collector(&mut collector);
        let first = collector.final_entropy().unwrap();
        let second = collector.final_entropy().unwrap();
        // Fresh CSPRNG bytes each call: outputs must differ.
        assert_ne!(first, second);
    }

    #[test]
    fn reset_restores_construction_state() {
        let mut collector = EntropyCollector::new();
        fill_collector(&mut collector);
        collector.reset();
        assert_eq!(collector.sample_count(), 0);
        assert!(!collector.is_complete());
        assert_eq!(collector.progress(), 0);
        // First sample after reset is unconditionally accepted again.
        collector.add_event(0, 0, 1.0);
        assert_eq!(collector.sample_count(), 1);
    }
}
