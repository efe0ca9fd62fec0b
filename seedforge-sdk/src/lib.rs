#![deny(missing_docs)]

//! Seedforge - complete entropy-to-keys pipeline.
//!
//! Re-exports all Seedforge components for convenient single-crate usage.

pub use seedforge_entropy as entropy;
pub use seedforge_primitives as primitives;
pub use seedforge_wallet as wallet;
