//! Error handling for KEM provider operations

use kemguard_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for KEM provider operations
///
/// Covers key generation, encapsulation, and decapsulation failures, plus
/// malformed inputs. The hardened decapsulation layer absorbs every one of
/// these into a fallback secret; they only surface to callers using a
/// provider directly.
#[derive(Debug, Clone, ThisError)]
pub enum Error {
    /// Key pair generation failed
    #[error("Key generation error for {algorithm}: {details}")]
    KeyGeneration {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Encapsulation failed
    #[error("Encapsulation error for {algorithm}: {details}")]
    Encapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Decapsulation failed
    #[error("Decapsulation error for {algorithm}: {details}")]
    Decapsulation {
        algorithm: &'static str,
        details: &'static str,
    },

    /// Invalid key format
    #[error("Invalid {key_type} key: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("Invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM provider operations
pub type Result<T> = core::result::Result<T, Error>;

// From Error to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::KeyGeneration { algorithm, details } => CoreError::RandomGenerationError {
                context: algorithm,
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                message: format!("encapsulation failed: {}", details),
            },
            Error::Decapsulation { algorithm, details } => CoreError::DecapsulationFailed {
                context: algorithm,
                message: format!("decapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                message: reason.to_string(),
            },
        }
    }
}

// Include validation submodule
pub mod validate;
