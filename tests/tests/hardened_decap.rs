//! Integration tests for hardened decapsulation over the real ML-KEM backend

use kemguard::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

#[test]
fn round_trip_mlkem512() {
    let mut rng = OsRng;

    let (pk, sk) = MlKem512::keypair(&mut rng).unwrap();
    let (ct, ss_sender) = MlKem512::encapsulate(&mut rng, &pk).unwrap();

    let mut decapsulator = HardenedDecapsulator::<MlKem512>::new();
    let ss_receiver = decapsulator.decapsulate(&sk, &pk, &ct);

    assert!(constant_time::ct_eq(
        ss_sender.as_ref(),
        ss_receiver.as_ref()
    ));
}

#[test]
fn round_trip_mlkem768() {
    let mut rng = OsRng;

    let (pk, sk) = MlKem768::keypair(&mut rng).unwrap();
    let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &pk).unwrap();

    let mut decapsulator = HardenedDecapsulator::<MlKem768>::new();
    let ss_receiver = decapsulator.decapsulate(&sk, &pk, &ct);

    assert!(constant_time::ct_eq(
        ss_sender.as_ref(),
        ss_receiver.as_ref()
    ));
}

#[test]
fn round_trip_mlkem1024() {
    let mut rng = OsRng;

    let (pk, sk) = MlKem1024::keypair(&mut rng).unwrap();
    let (ct, ss_sender) = MlKem1024::encapsulate(&mut rng, &pk).unwrap();

    let mut decapsulator = HardenedDecapsulator::<MlKem1024>::new();
    let ss_receiver = decapsulator.decapsulate(&sk, &pk, &ct);

    assert!(constant_time::ct_eq(
        ss_sender.as_ref(),
        ss_receiver.as_ref()
    ));
}

#[test]
fn round_trip_with_seeded_rng_and_many_sessions() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut decapsulator =
        HardenedDecapsulator::<MlKem768, _>::with_rng(ChaChaRng::seed_from_u64(7));

    for _ in 0..16 {
        let (pk, sk) = MlKem768::keypair(&mut rng).unwrap();
        let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &pk).unwrap();
        let ss_receiver = decapsulator.decapsulate(&sk, &pk, &ct);
        assert_eq!(ss_sender.as_ref(), ss_receiver.as_ref());
    }
}

#[test]
fn hardened_matches_raw_decapsulation_on_honest_input() {
    // With no fault present, hardening must be semantically invisible.
    let mut rng = ChaChaRng::seed_from_u64(1);

    let (pk, sk) = MlKem768::keypair(&mut rng).unwrap();
    let (ct, _) = MlKem768::encapsulate(&mut rng, &pk).unwrap();

    let raw = MlKem768::decapsulate(&sk, &ct).unwrap();
    let mut decapsulator =
        HardenedDecapsulator::<MlKem768, _>::with_rng(ChaChaRng::seed_from_u64(2));
    let hardened = decapsulator.decapsulate(&sk, &pk, &ct);

    assert_eq!(raw.as_ref(), hardened.as_ref());
}

#[test]
fn corrupted_ciphertext_yields_a_different_secret_without_erroring() {
    let mut rng = ChaChaRng::seed_from_u64(3);

    let (pk, sk) = MlKem1024::keypair(&mut rng).unwrap();
    let (ct, ss_genuine) = MlKem1024::encapsulate(&mut rng, &pk).unwrap();

    // Flip the first bit of the ciphertext.
    let mut bad = ct.to_bytes();
    bad[0] ^= 0x01;
    let bad_ct = kemguard::provider::mlkem::MlKemCiphertext::new(bad);

    let mut decapsulator =
        HardenedDecapsulator::<MlKem1024, _>::with_rng(ChaChaRng::seed_from_u64(4));
    let ss = decapsulator.decapsulate(&sk, &pk, &bad_ct);

    assert_eq!(ss.len(), 32);
    assert_ne!(ss.as_ref(), ss_genuine.as_ref());
}

#[test]
fn output_is_always_32_bytes() {
    let mut rng = ChaChaRng::seed_from_u64(5);
    let mut decapsulator =
        HardenedDecapsulator::<MlKem512, _>::with_rng(ChaChaRng::seed_from_u64(6));

    let (pk, sk) = MlKem512::keypair(&mut rng).unwrap();
    let (ct, _) = MlKem512::encapsulate(&mut rng, &pk).unwrap();

    // Honest input
    assert_eq!(decapsulator.decapsulate(&sk, &pk, &ct).len(), 32);

    // Corrupted input
    let mut bad = ct.to_bytes();
    bad[17] ^= 0x80;
    let bad_ct = kemguard::provider::mlkem::MlKemCiphertext::new(bad);
    assert_eq!(decapsulator.decapsulate(&sk, &pk, &bad_ct).len(), 32);

    // Wrong-length input (provider checkpoint)
    let short_ct = kemguard::provider::mlkem::MlKemCiphertext::new(vec![0u8; 13]);
    assert_eq!(decapsulator.decapsulate(&sk, &pk, &short_ct).len(), 32);
}
