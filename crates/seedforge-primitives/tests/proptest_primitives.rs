use proptest::prelude::*;

use seedforge_primitives::base58;
use seedforge_primitives::ec::private_key::PrivateKey;
use seedforge_primitives::hash::{keccak256, sha256, sha256d};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn base58_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let encoded = base58::encode(&bytes);
        let decoded = base58::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn base58_check_roundtrip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let encoded = base58::check_encode(&bytes);
        let decoded = base58::check_decode(&encoded).unwrap();
        prop_assert_eq!(decoded, bytes);
    }

    #[test]
    fn hash_lengths_are_fixed(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(sha256(&bytes).len(), 32);
        prop_assert_eq!(sha256d(&bytes).len(), 32);
        prop_assert_eq!(keccak256(&bytes).len(), 32);
    }

    #[test]
    fn private_key_hex_roundtrip(seed in prop::array::uniform32(any::<u8>())) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let hex_str = pk.to_hex();
            let pk2 = PrivateKey::from_hex(&hex_str).unwrap();
            prop_assert_eq!(pk, pk2);
        }
    }

    #[test]
    fn tweaked_key_matches_public_tweak_determinism(
        seed in prop::array::uniform32(any::<u8>()),
        tweak in prop::array::uniform32(any::<u8>())
    ) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            if let Ok(child) = pk.add_tweak(&tweak) {
                // Tweaking is a pure function of (key, tweak).
                let again = pk.add_tweak(&tweak).unwrap();
                prop_assert_eq!(child.to_bytes(), again.to_bytes());
                prop_assert_eq!(
                    child.pub_key().to_compressed(),
                    again.pub_key().to_compressed()
                );
            }
        }
    }
}
