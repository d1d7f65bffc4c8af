//! Fault-hardened KEM decapsulation.
//!
//! This crate is the hardening layer itself. It wraps any
//! `kemguard_api::KemProvider` and defends the decapsulation path against
//! skipped-instruction faults:
//!
//! - [`decode::RedundantDecoder`] recovers a message bit through two
//!   separately coded rounding formulations and refuses to answer when they
//!   disagree (a skipped `+ floor(Q/2)` offset is a classic fault target
//!   against lattice KEMs).
//! - [`consistency::verify_binding`] re-checks the Fujisaki-Okamoto
//!   re-encryption confirmation through a symmetric two-direction hash chain,
//!   so suppressing one of the raw equality tests is still caught.
//! - [`fallback`] produces a fresh random 32-byte secret whenever anything is
//!   off, so callers cannot tell *why* decapsulation "failed"; there is no
//!   error channel to turn into a decapsulation oracle.
//!
//! [`HardenedDecapsulator`] orchestrates the three and is the only entry
//! point production code should use.

pub mod consistency;
pub mod decode;
pub mod fallback;
pub mod fault;
pub mod hardened;

// Re-exports
pub use decode::RedundantDecoder;
pub use fault::Fault;
pub use hardened::{HardenedDecapsulator, SharedSecret};
