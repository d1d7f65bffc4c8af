//! Public API traits and types for the kemguard library
//!
//! This crate provides the public API surface shared across the kemguard
//! workspace: the `KemProvider` capability trait that concrete KEM backends
//! implement, the error types, and the secure byte containers used for
//! shared secrets.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{KemProvider, Serialize, SerializeSecret};
