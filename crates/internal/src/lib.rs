//! Internal utilities shared across the kemguard crates
//!
//! Nothing in here is specific to a KEM; these are the low-level helpers the
//! rest of the workspace builds on. The constant-time module is also part of
//! the public surface (re-exported by the facade) because callers checking
//! sender/receiver agreement need a timing-safe comparison.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod endian;
