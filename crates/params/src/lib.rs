//! Parameter constants for the kemguard library
//!
//! This crate is a dependency-free constants store. Byte lengths here are
//! dictated by the KEM provider's parameter sets; the hardening layer treats
//! keys and ciphertexts as opaque blobs of these sizes.

#![no_std]

pub mod pqc;

// Re-export the ML-KEM constants at the crate level for convenience
pub use pqc::mlkem::*;
