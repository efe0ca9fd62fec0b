//! secp256k1 public key with wallet-specific functionality.
//!
//! Supports compressed/uncompressed SEC1 serialization and the Hash160
//! fingerprint used by BIP-32 derivation.

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use std::fmt;

use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of a compressed public key in bytes (prefix + 32 byte x-coordinate).
const COMPRESSED_LEN: usize = 33;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
const UNCOMPRESSED_LEN: usize = 65;

/// A secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey` and provides the serializations that
/// address encoding and key derivation consume: compressed SEC1 for
/// CKD data and fingerprints, uncompressed SEC1 for keccak address
/// hashing.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_compressed() == other.to_compressed()
    }
}

impl Eq for PublicKey {}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes don't represent a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of a compressed (66 chars) or uncompressed (130 chars) key.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the hex or point is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the public key in compressed SEC1 format (33 bytes).
    ///
    /// The first byte is 0x02 (even Y) or 0x03 (odd Y), followed by the
    /// 32-byte X coordinate.
    ///
    /// # Returns
    /// A 33-byte array containing the compressed public key.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by 32-byte X and 32-byte Y
    /// coordinates. EVM and Tron addresses hash bytes 1..65 of this form.
    ///
    /// # Returns
    /// A 65-byte array containing the uncompressed public key.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hexadecimal string (compressed format).
    ///
    /// # Returns
    /// A 66-character hex string of the compressed public key.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_compressed())
    }

    /// Compute the Hash160 of the compressed public key.
    ///
    /// The first four bytes are the BIP-32 parent fingerprint.
    ///
    /// # Returns
    /// A 20-byte Hash160 digest of the compressed serialization.
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_compressed())
    }

    /// Wrap a k256 `VerifyingKey`.
    pub(crate) fn from_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::private_key::PrivateKey;

    // secp256k1 generator point: the public key for private key 1.
    const GENERATOR_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const GENERATOR_UNCOMPRESSED: &str =
        "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
         483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn test_public_key_for_scalar_one() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let pub_key = PrivateKey::from_bytes(&one).unwrap().pub_key();
        assert_eq!(pub_key.to_hex(), GENERATOR_COMPRESSED);
        assert_eq!(hex::encode(pub_key.to_uncompressed()), GENERATOR_UNCOMPRESSED);
    }

    #[test]
    fn test_public_key_parse_roundtrip() {
        let from_compressed = PublicKey::from_hex(GENERATOR_COMPRESSED).unwrap();
        let from_uncompressed = PublicKey::from_hex(GENERATOR_UNCOMPRESSED).unwrap();
        assert_eq!(from_compressed, from_uncompressed);
        assert_eq!(from_compressed.to_hex(), GENERATOR_COMPRESSED);
    }

    #[test]
    fn test_public_key_rejects_invalid() {
        assert!(PublicKey::from_bytes(&[]).is_err());
        // Valid prefix but X not on the curve.
        assert!(PublicKey::from_hex(
            "02ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        )
        .is_err());
        assert!(PublicKey::from_hex("not hex").is_err());
    }
}
