use seedforge_entropy::EntropyError;
use seedforge_primitives::PrimitivesError;

/// Internal diagnostics for a rejected mnemonic phrase.
///
/// Callers see one user-facing `WalletError::InvalidPhrase` category;
/// the wrapped variant stays distinguishable for diagnostics.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("word not in wordlist: {0:?}")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid word count: {0}")]
    BadWordCount(usize),

    #[error("invalid entropy length: {0} bytes")]
    InvalidEntropyLength(usize),
}

/// Error types for wallet operations.
///
/// `InvalidPhrase` is the only expected, user-recoverable condition
/// (phrase import); the remaining kinds are programmer errors given the
/// fixed internal derivation paths and pre-validated key lengths.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("invalid phrase: {0}")]
    InvalidPhrase(#[from] MnemonicError),

    #[error("malformed derivation path: {0:?}")]
    MalformedPath(String),

    #[error("invalid child index: {0:?}")]
    InvalidChildIndex(String),

    #[error("address encoding error: {0}")]
    AddressEncoding(String),

    #[error("primitives error: {0}")]
    Primitives(#[from] PrimitivesError),

    #[error("entropy error: {0}")]
    Entropy(#[from] EntropyError),
}
