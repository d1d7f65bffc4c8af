//! KEM provider adapters
//!
//! Concrete backends implementing the `kemguard_api::KemProvider` capability
//! set. Each third-party KEM library gets one adapter here; the hardening
//! layer in `kemguard-decap` is written once against the trait and never
//! against a library shape.
//!
//! The adapters expose *raw* decapsulation with none of the fault-attack
//! countermeasures. Production callers should reach for
//! `kemguard_decap::HardenedDecapsulator` instead.

pub mod error;
pub mod mlkem;

// Re-exports
pub use mlkem::{MlKem1024, MlKem512, MlKem768};
