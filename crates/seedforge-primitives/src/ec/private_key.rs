//! secp256k1 private key with wallet-specific functionality.
//!
//! Wraps a k256 signing key and adds hex serialization and the additive
//! scalar tweak used by BIP-32 child key derivation.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::PrimeField;
use k256::elliptic_curve::ScalarPrimitive;
use k256::{Scalar, Secp256k1};

use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// Length of a serialized private key in bytes.
const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// A secp256k1 private key.
///
/// Wraps a k256 `SigningKey` and provides serialization plus the
/// modular scalar addition that hierarchical derivation is built on.
/// Key material is zeroized on drop.
#[derive(Clone, Debug)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

impl PrivateKey {
    /// Create a private key from a raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte slice representing the private key scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_bytes(bytes.into())
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        if hex_str.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    ///
    /// # Returns
    /// A 32-byte array containing the private key scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    ///
    /// # Returns
    /// A 64-character hex string representing the 32-byte scalar.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Derive the corresponding public key for this private key.
    ///
    /// # Returns
    /// The `PublicKey` corresponding to this private key.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.inner.verifying_key())
    }

    /// Add a 32-byte tweak to this key's scalar, modulo the curve order.
    ///
    /// This is the scalar half of a BIP-32 CKD step: the child key is
    /// `IL + parent (mod n)`. Per BIP-32 the tweak must already be a
    /// canonical scalar (`IL < n`, no modular reduction of the input),
    /// and a zero result is invalid.
    ///
    /// # Arguments
    /// * `tweak` - A 32-byte big-endian scalar to add.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` with the summed scalar, or an error if the tweak
    /// is not canonical or the resulting key is zero.
    pub fn add_tweak(&self, tweak: &[u8; 32]) -> Result<PrivateKey, PrimitivesError> {
        let tweak_scalar: Scalar = Option::from(Scalar::from_repr((*tweak).into()))
            .ok_or_else(|| {
                PrimitivesError::InvalidPrivateKey(
                    "tweak is not a canonical scalar".to_string(),
                )
            })?;

        let sum = self.to_scalar() + tweak_scalar;

        let scalar_primitive: ScalarPrimitive<Secp256k1> = sum.into();
        let bytes = scalar_primitive.to_bytes();
        // from_bytes rejects the zero scalar.
        PrivateKey::from_bytes(&bytes)
    }

    /// Convert the private key to a k256 `Scalar` for arithmetic operations.
    ///
    /// # Returns
    /// The scalar representation of this private key.
    fn to_scalar(&self) -> Scalar {
        *self.inner.as_nonzero_scalar().as_ref()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        use zeroize::Zeroize;
        // Overwrite the signing key's memory with zeros.
        // SigningKey stores the scalar internally; we zeroize via its bytes representation.
        let mut bytes = self.inner.to_bytes();
        bytes.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
