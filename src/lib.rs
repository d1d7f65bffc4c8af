//! # kemguard
//!
//! A fault-attack-hardened decapsulation layer for ML-KEM (FIPS 203).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kemguard = "0.3"
//! ```
//!
//! ```no_run
//! use kemguard::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let mut rng = OsRng;
//! let (pk, sk) = MlKem768::keypair(&mut rng).unwrap();
//! let (ct, ss_sender) = MlKem768::encapsulate(&mut rng, &pk).unwrap();
//!
//! // Hardened decapsulation never fails: a detected fault yields a random
//! // fallback secret instead of an observable error.
//! let mut decapsulator = HardenedDecapsulator::<MlKem768>::new();
//! let ss_receiver = decapsulator.decapsulate(&sk, &pk, &ct);
//!
//! // Agreement is checked in constant time, out-of-band.
//! assert!(constant_time::ct_eq(ss_sender.as_ref(), ss_receiver.as_ref()));
//! ```
//!
//! ## Features
//!
//! - `mlkem` (default): ML-KEM provider adapters and the hardened
//!   decapsulator
//! - `fault-injection`: test-only hook that breaks the redundant decode
//!   check on purpose; never enable in production
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`kemguard-api`]: `KemProvider` trait, error types, secure containers
//! - [`kemguard-internal`]: constant-time and endian utilities
//! - [`kemguard-params`]: ML-KEM parameter constants
//! - [`kemguard-provider`]: adapters over the `ml-kem` backend
//! - [`kemguard-decap`]: the hardened decapsulation core

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use kemguard_api as api;
pub use kemguard_internal as internal;
pub use kemguard_params as params;

// Feature-gated re-exports
#[cfg(feature = "mlkem")]
pub use kemguard_decap as decap;

#[cfg(feature = "mlkem")]
pub use kemguard_provider as provider;

/// Common imports for kemguard users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KemProvider, Serialize, SerializeSecret};

    // Re-export secure containers and constant-time helpers
    pub use crate::api::types::SecretBytes;
    pub use crate::internal::constant_time;

    // Provider adapters and the hardened decapsulator
    #[cfg(feature = "mlkem")]
    pub use crate::provider::{MlKem1024, MlKem512, MlKem768};

    #[cfg(feature = "mlkem")]
    pub use crate::decap::{HardenedDecapsulator, SharedSecret};
}
