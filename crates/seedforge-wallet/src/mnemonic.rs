//! BIP-39 mnemonic encoding, validation, and seed stretching.
//!
//! Wraps the vetted `bip39` crate (wordlist, checksum arithmetic,
//! PBKDF2-HMAC-SHA512 stretch) and maps its errors onto the pipeline's
//! own taxonomy: a phrase failure is either an unknown word or a
//! checksum mismatch, both surfaced to callers as one invalid-phrase
//! category.

use bip39::Language;

use crate::error::{MnemonicError, WalletError};

/// Entropy byte lengths accepted by BIP-39 (12/15/18/21/24 words).
const VALID_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// A validated BIP-39 mnemonic phrase.
///
/// Round-trips losslessly with its source entropy and stretches to the
/// 64-byte seed that feeds master key construction.
#[derive(Clone, Debug)]
pub struct Mnemonic {
    inner: bip39::Mnemonic,
}

impl PartialEq for Mnemonic {
    fn eq(&self, other: &Self) -> bool {
        self.to_entropy() == other.to_entropy()
    }
}

impl Eq for Mnemonic {}

impl Mnemonic {
    /// Encode entropy bytes as a mnemonic phrase.
    ///
    /// The checksum (first `len * 8 / 32` bits of SHA-256 over the
    /// entropy) is appended and the combined bits split into 11-bit
    /// wordlist indices. Deterministic, no randomness.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28, or 32 bytes of entropy.
    ///
    /// # Returns
    /// `Ok(Mnemonic)` of 12..=24 words, or `InvalidPhrase` wrapping
    /// `InvalidEntropyLength` for any other byte length.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, WalletError> {
        if !VALID_ENTROPY_LENGTHS.contains(&entropy.len()) {
            return Err(MnemonicError::InvalidEntropyLength(entropy.len()).into());
        }
        let inner = bip39::Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(|e| map_bip39_error(e, ""))?;
        Ok(Mnemonic { inner })
    }

    /// Parse and validate a phrase, order-sensitively.
    ///
    /// Input is whitespace-trimmed and lowercased before parsing. Every
    /// word must exist in the fixed English wordlist and the trailing
    /// checksum bits must match a recomputed checksum over the leading
    /// entropy bits.
    ///
    /// # Arguments
    /// * `phrase` - A space-separated candidate phrase.
    ///
    /// # Returns
    /// `Ok(Mnemonic)` on success, or `WalletError::InvalidPhrase`
    /// distinguishing `UnknownWord` / `ChecksumMismatch` /
    /// `BadWordCount` internally.
    pub fn from_phrase(phrase: &str) -> Result<Self, WalletError> {
        let normalized = phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let inner = bip39::Mnemonic::parse_in_normalized(Language::English, &normalized)
            .map_err(|e| map_bip39_error(e, &normalized))?;
        Ok(Mnemonic { inner })
    }

    /// The entropy bytes this phrase encodes.
    pub fn to_entropy(&self) -> Vec<u8> {
        self.inner.to_entropy()
    }

    /// Stretch the phrase into the 64-byte seed feeding master key
    /// construction.
    ///
    /// PBKDF2-HMAC-SHA512 over the NFKD-normalized phrase with salt
    /// `"mnemonic" + passphrase` and 2048 iterations, per BIP-39.
    ///
    /// # Arguments
    /// * `passphrase` - Optional passphrase; empty string for none.
    ///
    /// # Returns
    /// The 64-byte stretched seed.
    pub fn to_seed(&self, passphrase: &str) -> [u8; 64] {
        self.inner.to_seed_normalized(passphrase)
    }

    /// The phrase as a single space-separated string.
    pub fn phrase(&self) -> String {
        self.inner.to_string()
    }

    /// Number of words in the phrase (12, 15, 18, 21, or 24).
    pub fn word_count(&self) -> usize {
        self.inner.word_count()
    }
}

/// Map a `bip39` crate error onto the pipeline taxonomy.
fn map_bip39_error(err: bip39::Error, normalized_phrase: &str) -> WalletError {
    let kind = match err {
        bip39::Error::BadWordCount(count) => MnemonicError::BadWordCount(count),
        bip39::Error::UnknownWord(index) => {
            let word = normalized_phrase
                .split_whitespace()
                .nth(index)
                .unwrap_or_default();
            MnemonicError::UnknownWord(word.to_string())
        }
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumMismatch,
        bip39::Error::BadEntropyBitCount(bits) => {
            MnemonicError::InvalidEntropyLength(bits / 8)
        }
        // Language ambiguity cannot occur with a pinned wordlist.
        other => MnemonicError::UnknownWord(other.to_string()),
    };
    WalletError::InvalidPhrase(kind)
}
