//! End-to-end pipeline scenario: pointer samples through to an
//! assembled four-chain wallet, plus the import path.

use seedforge_entropy::collector::POOL_SIZE;
use seedforge_entropy::EntropyCollector;
use seedforge_primitives::base58;
use seedforge_wallet::{generate_from_entropy, import_from_phrase, Mnemonic, WalletError};

#[test]
fn collection_to_wallet_end_to_end() {
    let mut collector = EntropyCollector::new();

    // Exactly POOL_SIZE samples with distinct coordinates, all past the
    // movement gate.
    for i in 0..POOL_SIZE as i32 {
        collector.add_event(i * 6, i * 6 + 1, i as f64 * 0.73);
    }
    assert!(collector.is_complete());
    assert_eq!(collector.sample_count(), POOL_SIZE);

    let entropy = collector.final_entropy().unwrap();
    assert_eq!(entropy.len(), 32);

    // 32 bytes of entropy encode as a 24-word phrase.
    let mnemonic = Mnemonic::from_entropy(&entropy).unwrap();
    assert_eq!(mnemonic.word_count(), 24);

    let wallet = generate_from_entropy(&entropy).unwrap();
    assert_eq!(wallet.mnemonic, mnemonic.phrase());

    // EVM family shares one address; Tron is distinct and Base58Check-valid.
    let eth = &wallet.wallets[0];
    let bnb = &wallet.wallets[1];
    let polygon = &wallet.wallets[2];
    let tron = &wallet.wallets[3];
    assert_eq!(eth.address, bnb.address);
    assert_eq!(eth.address, polygon.address);
    assert_ne!(tron.address, eth.address);

    let tron_payload = base58::check_decode(&tron.address).unwrap();
    assert_eq!(tron_payload.len(), 21);
    assert_eq!(tron_payload[0], 0x41);
}

#[test]
fn two_finalizations_yield_different_wallets() {
    let mut collector = EntropyCollector::new();
    for i in 0..POOL_SIZE as i32 {
        collector.add_event(i * 6, 0, i as f64);
    }

    // The mix draws fresh CSPRNG bytes per call, so the same pool
    // produces two different wallets.
    let first = generate_from_entropy(&collector.final_entropy().unwrap()).unwrap();
    let second = generate_from_entropy(&collector.final_entropy().unwrap()).unwrap();
    assert_ne!(first.mnemonic, second.mnemonic);
}

#[test]
fn import_is_repeatable_after_rejection() {
    let valid =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    let invalid = valid.replace("about", "nonsenseword");

    assert!(matches!(
        import_from_phrase(&invalid),
        Err(WalletError::InvalidPhrase(_))
    ));

    // A rejected import mutates nothing; the same call path succeeds
    // with a corrected phrase.
    let wallet = import_from_phrase(valid).unwrap();
    assert_eq!(
        wallet.wallets[0].address,
        "0x9858EfFD232B4033E47d90003D41EC34EcaEda94"
    );
}
