//! Trait definitions for the kemguard public API

pub mod kem;
pub mod serialize;

pub use kem::KemProvider;
pub use serialize::{Serialize, SerializeSecret};
