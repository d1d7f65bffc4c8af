// provider/src/mlkem/mod.rs

//! ML-KEM (FIPS 203) provider adapters.
//!
//! This module adapts the RustCrypto `ml-kem` crate to the
//! `kemguard_api::KemProvider` capability set. Keys and ciphertexts cross the
//! boundary as raw byte encodings; the backend's strongly-typed forms are
//! reconstructed per call, so the rest of the workspace never depends on the
//! backend's type machinery.

// Modules defining the adapter logic.
mod common;

// Concrete ML-KEM variants
mod mlkem1024;
mod mlkem512;
mod mlkem768;

// Re-export the primary provider types for each security level.
pub use self::mlkem1024::MlKem1024;
pub use self::mlkem512::MlKem512;
pub use self::mlkem768::MlKem768;

// Re-export common key/ciphertext types if users need to name them directly.
pub use self::common::{
    MlKemCiphertext, MlKemKem, MlKemLevel, MlKemPublicKey, MlKemSecretKey, MlKemSharedSecret,
};
