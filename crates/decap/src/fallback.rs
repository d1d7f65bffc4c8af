//! Fallback secret generation.

use kemguard_api::types::SecretBytes;
use kemguard_params::MLKEM_SS_BYTES;
use rand::{CryptoRng, RngCore};

/// Draw a substitute shared secret from `rng`.
///
/// Deliberately takes nothing else. The output must carry zero information
/// about the anomaly that triggered it, so no ciphertext, key, or faulted
/// intermediate value ever feeds this function.
pub fn fallback_secret<R: CryptoRng + RngCore>(rng: &mut R) -> SecretBytes<MLKEM_SS_BYTES> {
    SecretBytes::random(rng)
}
