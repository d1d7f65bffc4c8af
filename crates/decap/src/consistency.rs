//! Re-encryption consistency verification.
//!
//! Mirrors the Fujisaki-Okamoto confirmation step: the decrypted message is
//! bound back to the received ciphertext via a re-derived candidate and a
//! confirmation tag pair. On top of the raw equalities, the binding is
//! checked through two hash chains folded in opposite orders; a fault that
//! suppresses exactly one of the equality tests still has to forge the
//! symmetric chain equality to go unnoticed.

use kemguard_internal::constant_time::ct_eq_choice;
use sha3::{Digest, Sha3_256};
use subtle::Choice;

/// Confirmation tag pinned by the re-encryption step. Both halves of the tag
/// pair carry this value when the pipeline is healthy.
pub(crate) const CONFIRM_TAG: u8 = 0xAB;

/// Verify that a re-derived ciphertext candidate and a confirmation tag pair
/// are consistent with the received ciphertext.
///
/// Requires the raw byte equality of `ciphertext`/`candidate` and of the
/// tags, and equality of the two symmetric chains
/// `H(H(ct ‖ cand) ‖ tag ‖ tag')` and `H(H(cand ‖ ct) ‖ tag' ‖ tag)`.
///
/// Returns a single consistent/inconsistent verdict; which sub-check failed
/// is never exposed.
pub fn verify_binding(ciphertext: &[u8], candidate: &[u8], tag: u8, tag_prime: u8) -> bool {
    let bytes_match = ct_eq_choice(ciphertext, candidate);
    let tags_match = Choice::from((tag == tag_prime) as u8);

    let forward = chain(ciphertext, candidate, tag, tag_prime);
    let reverse = chain(candidate, ciphertext, tag_prime, tag);
    let chains_match = ct_eq_choice(forward, reverse);

    // Every sub-check is evaluated; none short-circuits the others.
    bool::from(bytes_match & tags_match & chains_match)
}

// One direction of the binding chain: H(H(first ‖ second) ‖ tag ‖ tag').
fn chain(first: &[u8], second: &[u8], tag: u8, tag_prime: u8) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    hasher.update(first);
    hasher.update(second);
    let inner = hasher.finalize();

    let mut hasher = Sha3_256::new();
    hasher.update(&inner);
    hasher.update([tag, tag_prime]);
    hasher.finalize().into()
}
