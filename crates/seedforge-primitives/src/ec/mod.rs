//! Elliptic curve cryptography over secp256k1.
//!
//! Newtype wrappers around `k256` providing the key serialization and
//! scalar arithmetic needed for hierarchical key derivation.

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
