//! Redundant message-bit decoding.

use kemguard_internal::endian::u16_from_le_prefix;
use kemguard_params::{MLKEM_HALF_Q, MLKEM_Q};

use crate::fault::Fault;

const Q: u32 = MLKEM_Q as u32;
const HALF_Q: u32 = MLKEM_HALF_Q as u32;

/// Extract the decode coefficient from a ciphertext.
///
/// Reads a little-endian u16 from the first two ciphertext bytes, reduced
/// into `[0, Q)`. A ciphertext shorter than two bytes degrades to
/// coefficient 0 rather than raising an error.
pub fn coefficient_from_ciphertext(ciphertext: &[u8]) -> u16 {
    u16_from_le_prefix(ciphertext) % MLKEM_Q
}

/// Decoder that recovers a message bit from a coefficient twice, through two
/// separately coded formulations, and refuses to answer when they disagree.
///
/// The primary path computes `((2a + floor(Q/2)) / Q) mod 2`. The shadow path
/// recomputes the same quantity with its rounding offset held as instance
/// state: in production the offset equals `floor(Q/2)` and the paths agree
/// for every coefficient, while an offset-skipping fault makes them disagree
/// on a large fraction of the coefficient range.
///
/// Fault simulation is per-instance configuration, not process state, so
/// concurrent tests never interfere with each other.
#[derive(Clone, Debug, Default)]
pub struct RedundantDecoder {
    #[cfg(feature = "fault-injection")]
    skip_rounding_offset: bool,
}

impl RedundantDecoder {
    /// Production decoder: both decode paths carry the rounding offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder whose shadow path omits the `+ floor(Q/2)` rounding term,
    /// simulating an instruction-skip fault in the decode stage.
    #[cfg(feature = "fault-injection")]
    pub fn with_skipped_offset() -> Self {
        Self {
            skip_rounding_offset: true,
        }
    }

    /// Decode one message bit from a coefficient in `[0, Q)`.
    ///
    /// Returns the bit when both formulations agree, and `Fault::Decode`
    /// otherwise, with no indication of which path disagreed.
    pub fn decode_bit(&self, coeff: u16) -> Result<u8, Fault> {
        let primary = round_decode(coeff);
        let shadow = self.shadow_decode(coeff);

        if primary != shadow {
            return Err(Fault::Decode);
        }
        Ok(primary)
    }

    // Second formulation of the same rounding decode. Kept as a separate code
    // path so one skipped instruction cannot silently patch both.
    fn shadow_decode(&self, coeff: u16) -> u8 {
        let scaled = (u32::from(coeff) << 1) + self.shadow_offset();
        ((scaled / Q) & 1) as u8
    }

    fn shadow_offset(&self) -> u32 {
        #[cfg(feature = "fault-injection")]
        if self.skip_rounding_offset {
            return 0;
        }
        HALF_Q
    }
}

/// `round(2a / Q) mod 2` via the add-offset-then-divide formulation.
fn round_decode(coeff: u16) -> u8 {
    (((u32::from(coeff) * 2 + HALF_Q) / Q) & 1) as u8
}
