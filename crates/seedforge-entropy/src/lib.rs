/// Seedforge entropy - pointer-movement entropy collection.
///
/// Gates raw pointer samples into a bounded pool, tracks collection
/// progress, and mixes the completed pool with OS randomness into a
/// 256-bit seed:
/// - `Sample` / `EntropyPool`: bounded, append-only sample buffer
/// - `EntropyCollector`: movement gating, progress, final keccak mix

pub mod collector;
pub mod pool;

mod error;
pub use collector::EntropyCollector;
pub use error::EntropyError;
pub use pool::{EntropyPool, Sample};
