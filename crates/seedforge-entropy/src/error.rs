/// Error types for entropy collection.
#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("entropy pool incomplete: {got} of {needed} samples collected")]
    IncompleteEntropy { got: usize, needed: usize },
}
