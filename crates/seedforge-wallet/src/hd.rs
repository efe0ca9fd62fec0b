//! BIP-32 hierarchical deterministic key derivation.
//!
//! Builds a master extended key from a stretched mnemonic seed and
//! walks hardened/non-hardened derivation paths. Scalar and point
//! arithmetic is delegated to the primitives crate; this module owns
//! the HMAC expansion, serialization layout, and path grammar.

use seedforge_primitives::ec::{PrivateKey, PublicKey};
use seedforge_primitives::hash::sha512_hmac;

use crate::error::WalletError;

/// Offset marking a hardened child index (2^31).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// HMAC key for master key construction, fixed by BIP-32.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// A BIP-32 extended key node: private key plus chain code and the
/// metadata identifying its position in the tree.
///
/// Owned by the deriver for the duration of a derivation call; nothing
/// here is retained after the wallet record is assembled.
#[derive(Clone, Debug)]
pub struct ExtendedKey {
    private_key: PrivateKey,
    chain_code: [u8; 32],
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_index: u32,
}

impl ExtendedKey {
    /// Build the master key (depth 0) from a stretched seed.
    ///
    /// A single HMAC-SHA512 expansion keyed `"Bitcoin seed"`: the left
    /// 32 bytes become the private key, the right 32 bytes the chain
    /// code. Deterministic: the same seed always yields the same node.
    ///
    /// # Arguments
    /// * `seed` - Seed bytes, typically the 64-byte BIP-39 stretch.
    ///
    /// # Returns
    /// `Ok(ExtendedKey)` at depth 0, or an error in the negligible
    /// case that the left half is not a valid scalar.
    pub fn master_from_seed(seed: &[u8]) -> Result<Self, WalletError> {
        let expanded = sha512_hmac(MASTER_HMAC_KEY, seed);
        let (left, right) = expanded.split_at(32);

        let private_key = PrivateKey::from_bytes(left)?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(right);

        Ok(ExtendedKey {
            private_key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
        })
    }

    /// Derive one child key (CKD step).
    ///
    /// Hardened steps (`index >= 2^31`) hash `0x00 || parent_priv ||
    /// ser32(index)`; non-hardened steps hash `parent_pub_compressed ||
    /// ser32(index)`. Both are HMAC-SHA512 keyed by the parent chain
    /// code; the child key is `IL + parent (mod n)` with IL validated
    /// in range. Pure and side-effect-free.
    ///
    /// # Arguments
    /// * `index` - Raw child index, hardened offset included.
    ///
    /// # Returns
    /// `Ok(ExtendedKey)` one level deeper, or an error for an invalid
    /// derived scalar (probability ~2^-127) or depth overflow.
    pub fn derive_child(&self, index: u32) -> Result<Self, WalletError> {
        let mut data = Vec::with_capacity(37);
        if index >= HARDENED_OFFSET {
            data.push(0x00);
            data.extend_from_slice(&self.private_key.to_bytes());
        } else {
            data.extend_from_slice(&self.private_key.pub_key().to_compressed());
        }
        data.extend_from_slice(&index.to_be_bytes());

        let expanded = sha512_hmac(&self.chain_code, &data);
        let (left, right) = expanded.split_at(32);

        let mut tweak = [0u8; 32];
        tweak.copy_from_slice(left);
        let private_key = self.private_key.add_tweak(&tweak)?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(right);

        let parent_hash = self.private_key.pub_key().hash160();
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&parent_hash[..4]);

        let depth = self.depth.checked_add(1).ok_or_else(|| {
            WalletError::MalformedPath(format!(
                "derivation deeper than 255 levels at index {index}"
            ))
        })?;

        Ok(ExtendedKey {
            private_key,
            chain_code,
            depth,
            parent_fingerprint,
            child_index: index,
        })
    }

    /// Walk a derivation path string from this node.
    ///
    /// # Arguments
    /// * `path` - A path such as `m/44'/60'/0'/0/0`; `'` or `h` marks
    ///   a hardened segment.
    ///
    /// # Returns
    /// `Ok(ExtendedKey)` at the end of the path, or `MalformedPath` /
    /// `InvalidChildIndex` for bad syntax or out-of-range indices.
    pub fn derive_path(&self, path: &str) -> Result<Self, WalletError> {
        let mut key = self.clone();
        for index in parse_path(path)? {
            key = key.derive_child(index)?;
        }
        Ok(key)
    }

    /// The node's private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The node's public key.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.pub_key()
    }

    /// The node's chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Depth in the tree (0 for the master key).
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// First four bytes of the parent public key's Hash160.
    pub fn parent_fingerprint(&self) -> &[u8; 4] {
        &self.parent_fingerprint
    }

    /// The raw child index this node was derived with (hardened offset
    /// included); 0 for the master key.
    pub fn child_index(&self) -> u32 {
        self.child_index
    }
}

/// Parse a derivation path into raw child indices.
///
/// Grammar: `m` optionally followed by `/` separated unsigned decimal
/// segments, each with an optional `'` or `h` hardened suffix. A
/// segment value must be below 2^31 before the hardened offset is
/// applied.
pub fn parse_path(path: &str) -> Result<Vec<u32>, WalletError> {
    let mut segments = path.trim().split('/');
    if segments.next() != Some("m") {
        return Err(WalletError::MalformedPath(path.to_string()));
    }

    let mut indices = Vec::new();
    for segment in segments {
        let (digits, hardened) = match segment.strip_suffix(['\'', 'h']) {
            Some(rest) => (rest, true),
            None => (segment, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WalletError::MalformedPath(path.to_string()));
        }
        let value: u64 = digits
            .parse()
            .map_err(|_| WalletError::InvalidChildIndex(segment.to_string()))?;
        if value >= HARDENED_OFFSET as u64 {
            return Err(WalletError::InvalidChildIndex(segment.to_string()));
        }
        let mut index = value as u32;
        if hardened {
            index += HARDENED_OFFSET;
        }
        indices.push(index);
    }
    Ok(indices)
}
