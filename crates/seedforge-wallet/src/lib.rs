/// Seedforge wallet - mnemonic codec, HD key derivation, and address encoding.
///
/// Turns a 32-byte entropy seed (or an imported phrase) into a
/// deterministic multi-chain wallet record:
/// - BIP-39 mnemonic encoding/decoding and seed stretching
/// - BIP-32/44 hierarchical key derivation over secp256k1
/// - EVM (EIP-55) and Tron (Base58Check) address encoding
/// - Wallet assembly and session orchestration

mod error;
pub use error::{MnemonicError, WalletError};

pub mod address;
pub mod chains;
pub mod hd;
pub mod mnemonic;
pub mod session;

pub use chains::{
    generate_from_entropy, import_from_phrase, ChainWallet, GeneratedWallet,
    EVM_DERIVATION_PATH, TRON_DERIVATION_PATH,
};
pub use hd::ExtendedKey;
pub use mnemonic::Mnemonic;
pub use session::{SessionState, WalletSession};
