//! Session orchestration over the full pipeline.
//!
//! A `WalletSession` owns exactly one entropy collector and walks the
//! collection path end to end: samples in, progress out, then entropy →
//! mnemonic → derived keys → assembled wallet. Sessions are explicitly
//! constructed and independent; no process-wide state is shared, so
//! tests (and a multi-view UI) can run several side by side.

use seedforge_entropy::EntropyCollector;

use crate::chains::{generate_from_entropy, import_from_phrase, GeneratedWallet};
use crate::error::WalletError;

/// Where a session currently sits in the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Still gating pointer samples into the pool.
    Collecting,
    /// Pool full; the wallet can be finalized.
    Complete,
}

/// One entropy-collection session producing at most one wallet.
#[derive(Debug, Default)]
pub struct WalletSession {
    collector: EntropyCollector,
}

impl WalletSession {
    /// Start a fresh session with an empty collector.
    pub fn new() -> Self {
        WalletSession {
            collector: EntropyCollector::new(),
        }
    }

    /// Feed one pointer sample; returns collection progress (0..=100).
    pub fn add_sample(&mut self, x: i32, y: i32, timestamp: f64) -> u8 {
        self.collector.add_event(x, y, timestamp)
    }

    /// Collection progress as a percentage.
    pub fn progress(&self) -> u8 {
        self.collector.progress()
    }

    /// Current pipeline state.
    pub fn state(&self) -> SessionState {
        if self.collector.is_complete() {
            SessionState::Complete
        } else {
            SessionState::Collecting
        }
    }

    /// Mix the completed pool into a seed and assemble the wallet.
    ///
    /// Fails with an incomplete-entropy error while still collecting.
    /// The returned record is handed to the caller by value; a new
    /// wallet from the same session draws fresh mix randomness and so
    /// differs deliberately.
    pub fn finalize(&self) -> Result<GeneratedWallet, WalletError> {
        let entropy = self.collector.final_entropy()?;
        generate_from_entropy(&entropy)
    }

    /// Restore a wallet from an existing phrase, bypassing collection.
    ///
    /// Leaves the session's collector untouched, whether the phrase is
    /// valid or not.
    pub fn import_phrase(&self, phrase: &str) -> Result<GeneratedWallet, WalletError> {
        import_from_phrase(phrase)
    }

    /// Discard all pool state and return to `Collecting`.
    ///
    /// Callable at any time; afterwards the session is
    /// indistinguishable from a freshly constructed one.
    pub fn reset(&mut self) {
        self.collector.reset();
    }
}
