// File: crates/api/src/traits/kem.rs

//! Capability contract for external KEM engines.
//!
//! The hardening layer never touches lattice arithmetic or wire formats; it
//! consumes exactly the capability set below. Concrete backends (one adapter
//! per third-party KEM library) implement this trait once, so the hardening
//! logic is written once rather than per library shape.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for an external Key Encapsulation Mechanism provider.
///
/// # Security Design
///
/// Key and ciphertext internals are opaque to consumers of this trait: the
/// associated types guarantee safe serialization contracts, and secret
/// material is zeroized on drop. A provider's `decapsulate` is the *raw*
/// operation; it carries none of the fault-hardening countermeasures, which
/// live one layer up.
pub trait KemProvider {
    /// Public (encapsulation) key type.
    type PublicKey: Clone + Serialize;

    /// Secret (decapsulation) key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee zeroizing serialization.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys. It is an
    /// intermediate type and does not require a serialization contract.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    /// - Fails with a key-generation error on entropy or parameter failure.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// Fails with an encapsulation error on an invalid key.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the secret key.
    ///
    /// Fails with a decapsulation error on a malformed ciphertext or key.
    /// Implementations should use implicit rejection for IND-CCA2 security
    /// where applicable; callers needing fault-attack resistance must wrap
    /// this operation in a hardened decapsulator rather than call it
    /// directly.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
