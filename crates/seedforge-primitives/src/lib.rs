/// Seedforge primitives - hashing, encoding, and elliptic curve keys.
///
/// This crate provides the foundational building blocks for the wallet
/// pipeline:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Keccak-256, HMAC-SHA512)
/// - Base58 and Base58Check encoding/decoding
/// - Elliptic curve cryptography (secp256k1 keys and scalar arithmetic)

pub mod hash;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
