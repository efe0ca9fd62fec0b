//! Per-chain address encoding from derived public keys.
//!
//! Both supported chains hash the uncompressed public key (minus its
//! SEC1 prefix byte) with Keccak-256 and keep the last 20 bytes. EVM
//! chains render that as 0x-prefixed hex with EIP-55 checksum casing;
//! Tron prefixes the version byte 0x41 and Base58Check-encodes the
//! result, which always yields a leading 'T'.

use seedforge_primitives::base58;
use seedforge_primitives::hash::keccak256;

use crate::error::WalletError;

/// Tron address version byte, fixed by the protocol.
pub const TRON_VERSION_BYTE: u8 = 0x41;

/// Length of an uncompressed SEC1 public key.
const UNCOMPRESSED_LEN: usize = 65;

/// SEC1 prefix of an uncompressed public key.
const UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Encode an EVM-style address from an uncompressed public key.
///
/// The address is the last 20 bytes of `keccak256(pubkey[1..65])`,
/// rendered with EIP-55 mixed-case checksum casing.
///
/// # Arguments
/// * `uncompressed` - A 65-byte SEC1 uncompressed public key (0x04 prefix).
///
/// # Returns
/// A checksummed `0x...` address string, or `AddressEncoding` if the
/// key material is not exactly the expected shape.
pub fn evm_address(uncompressed: &[u8]) -> Result<String, WalletError> {
    let hash = pubkey_hash(uncompressed)?;
    Ok(eip55_checksum(&hash))
}

/// Encode a Tron address from an uncompressed public key.
///
/// Takes the same 20-byte keccak hash as the EVM form, prefixes the
/// 0x41 version byte, and Base58Check-encodes (4-byte double-SHA-256
/// checksum appended).
///
/// # Arguments
/// * `uncompressed` - A 65-byte SEC1 uncompressed public key (0x04 prefix).
///
/// # Returns
/// A Base58Check address string beginning with 'T', or
/// `AddressEncoding` for malformed key material.
pub fn tron_address(uncompressed: &[u8]) -> Result<String, WalletError> {
    let hash = pubkey_hash(uncompressed)?;
    let mut payload = Vec::with_capacity(21);
    payload.push(TRON_VERSION_BYTE);
    payload.extend_from_slice(&hash);
    Ok(base58::check_encode(&payload))
}

/// Last 20 bytes of the keccak hash of the key's curve point.
fn pubkey_hash(uncompressed: &[u8]) -> Result<[u8; 20], WalletError> {
    if uncompressed.len() != UNCOMPRESSED_LEN || uncompressed[0] != UNCOMPRESSED_PREFIX {
        return Err(WalletError::AddressEncoding(format!(
            "expected {} uncompressed key bytes with 0x04 prefix, got {} bytes",
            UNCOMPRESSED_LEN,
            uncompressed.len()
        )));
    }
    let digest = keccak256(&uncompressed[1..]);
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&digest[12..]);
    Ok(hash)
}

/// Apply EIP-55 checksum casing to a 20-byte address.
///
/// Each hex digit of the lowercase address is uppercased when the
/// corresponding nibble of `keccak256(lowercase_hex)` is >= 8.
fn eip55_checksum(address: &[u8; 20]) -> String {
    let lower = hex::encode(address);
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}
