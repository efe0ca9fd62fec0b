//! Multi-chain wallet assembly.
//!
//! Fixed per-chain derivation policy: the EVM family (Ethereum, BNB
//! Chain, Polygon) shares one path, one key, and one address because
//! the three chains share a curve and an address format; Tron gets its
//! own coin type and encoding. The assembled record is the pipeline's
//! sole output artifact, handed to the caller by value.

use serde::{Deserialize, Serialize};

use crate::address;
use crate::error::WalletError;
use crate::hd::ExtendedKey;
use crate::mnemonic::Mnemonic;

/// Shared BIP-44 path for the EVM family (coin type 60).
pub const EVM_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// BIP-44 path for Tron (coin type 195).
pub const TRON_DERIVATION_PATH: &str = "m/44'/195'/0'/0/0";

/// One chain's credentials within a generated wallet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainWallet {
    /// Chain display name, e.g. "Ethereum".
    pub chain: String,
    /// Token standard ticker suffix, e.g. "ERC20".
    pub symbol: String,
    /// Chain-specific address string.
    pub address: String,
    /// Derivation path the key was taken from.
    pub path: String,
    /// Derived private key as lowercase hex.
    pub private_key: String,
}

/// The assembled wallet record: mnemonic, master key, and per-chain
/// credentials in fixed order. Immutable once constructed; ownership
/// passes to the caller for the remainder of the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedWallet {
    /// The BIP-39 phrase backing every derived key.
    pub mnemonic: String,
    /// Master (depth 0) private key as lowercase hex.
    pub private_key: String,
    /// Per-chain wallets: Ethereum, BNB Chain, Polygon, Tron.
    pub wallets: Vec<ChainWallet>,
}

/// Build a wallet record from raw entropy bytes.
///
/// Collection-path entry point: encode the entropy as a mnemonic, then
/// derive every chain wallet from its stretched seed.
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 entropy bytes (32 from the
///   collector, yielding a 24-word phrase).
///
/// # Returns
/// The assembled `GeneratedWallet`, or an error for an invalid entropy
/// length.
pub fn generate_from_entropy(entropy: &[u8]) -> Result<GeneratedWallet, WalletError> {
    let mnemonic = Mnemonic::from_entropy(entropy)?;
    assemble(&mnemonic)
}

/// Build a wallet record from an existing phrase.
///
/// Import-path entry point, bypassing entropy collection. Validation
/// failures surface as `WalletError::InvalidPhrase` and mutate no
/// state, so the caller can re-enter with a corrected phrase.
///
/// # Arguments
/// * `phrase` - A space-separated candidate phrase; surrounding and
///   repeated whitespace is tolerated.
///
/// # Returns
/// The assembled `GeneratedWallet`, or `InvalidPhrase`.
pub fn import_from_phrase(phrase: &str) -> Result<GeneratedWallet, WalletError> {
    let mnemonic = Mnemonic::from_phrase(phrase)?;
    assemble(&mnemonic)
}

/// Derive all chain wallets from a validated mnemonic.
fn assemble(mnemonic: &Mnemonic) -> Result<GeneratedWallet, WalletError> {
    let seed = mnemonic.to_seed("");
    let master = ExtendedKey::master_from_seed(&seed)?;

    let evm = master.derive_path(EVM_DERIVATION_PATH)?;
    let tron = master.derive_path(TRON_DERIVATION_PATH)?;

    let evm_address = address::evm_address(&evm.public_key().to_uncompressed())?;
    let tron_address = address::tron_address(&tron.public_key().to_uncompressed())?;

    let evm_key_hex = evm.private_key().to_hex();

    let wallets = vec![
        ChainWallet {
            chain: "Ethereum".to_string(),
            symbol: "ERC20".to_string(),
            address: evm_address.clone(),
            path: EVM_DERIVATION_PATH.to_string(),
            private_key: evm_key_hex.clone(),
        },
        ChainWallet {
            chain: "BNB Chain".to_string(),
            symbol: "BEP20".to_string(),
            address: evm_address.clone(),
            path: EVM_DERIVATION_PATH.to_string(),
            private_key: evm_key_hex.clone(),
        },
        ChainWallet {
            chain: "Polygon".to_string(),
            symbol: "ERC20".to_string(),
            address: evm_address,
            path: EVM_DERIVATION_PATH.to_string(),
            private_key: evm_key_hex,
        },
        ChainWallet {
            chain: "Tron".to_string(),
            symbol: "TRC20".to_string(),
            address: tron_address,
            path: TRON_DERIVATION_PATH.to_string(),
            private_key: tron.private_key().to_hex(),
        },
    ];

    Ok(GeneratedWallet {
        mnemonic: mnemonic.phrase(),
        private_key: master.private_key().to_hex(),
        wallets,
    })
}
