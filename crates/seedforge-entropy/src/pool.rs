//! Bounded, append-only entropy sample pool.
//!
//! Pure data structure with no gating policy: the pool records
//! timestamped pointer samples in insertion order and serializes them
//! into one byte string for hashing. Ordering is significant because
//! the byte join feeds a collision-resistant hash.

/// One pointer sample: screen coordinates plus a high-resolution
/// timestamp. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    /// Horizontal screen coordinate.
    pub x: i32,
    /// Vertical screen coordinate.
    pub y: i32,
    /// High-resolution capture time in milliseconds.
    pub captured_at: f64,
}

/// Ordered sequence of samples with a fixed capacity target.
///
/// Length is monotonically non-decreasing until the owning collector
/// freezes or clears it; the pool itself never truncates.
#[derive(Clone, Debug, Default)]
pub struct EntropyPool {
    samples: Vec<Sample>,
}

impl EntropyPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        EntropyPool { samples: Vec::new() }
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the pool holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample. Insertion order is preserved.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Serialize every sample into one byte string in pool order.
    ///
    /// Each sample contributes its coordinates and timestamp as
    /// little-endian bytes, so the join is deterministic for a given
    /// sample sequence.
    pub fn as_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.samples.len() * 16);
        for sample in &self.samples {
            out.extend_from_slice(&sample.x.to_le_bytes());
            out.extend_from_slice(&sample.y.to_le_bytes());
            out.extend_from_slice(&sample.captured_at.to_le_bytes());
        }
        out
    }

    /// Discard all samples, returning the pool to its initial state.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
