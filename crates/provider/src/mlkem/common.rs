//! Shared types and the generic adapter implementation for all ML-KEM levels.

use core::marker::PhantomData;

use kemguard_api::error::Result as ApiResult;
use kemguard_api::types::SecretBytes;
use kemguard_api::{KemProvider, Serialize, SerializeSecret};
use kemguard_params::{MlKemParams, MLKEM_SS_BYTES};
use ml_kem::kem::{Decapsulate, Encapsulate};
use ml_kem::{Encoded, EncodedSizeUser, KemCore};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Error};

/// ML-KEM encapsulation (public) key as its raw FIPS 203 byte encoding
#[derive(Clone)]
pub struct MlKemPublicKey(pub(crate) Vec<u8>);

/// ML-KEM decapsulation (secret) key as its raw FIPS 203 byte encoding
#[derive(Clone, Zeroize)]
pub struct MlKemSecretKey(pub(crate) Vec<u8>);

/// ML-KEM ciphertext
#[derive(Clone)]
pub struct MlKemCiphertext(pub(crate) Vec<u8>);

/// ML-KEM shared secret, always 32 bytes
#[derive(Clone, Zeroize, PartialEq, Eq, Debug)]
pub struct MlKemSharedSecret(pub(crate) SecretBytes<MLKEM_SS_BYTES>);

impl MlKemPublicKey {
    /// Wrap an existing byte encoding
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemSecretKey {
    /// Wrap an existing byte encoding
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl MlKemCiphertext {
    /// Wrap an existing ciphertext
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for MlKemPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MlKemSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Serialize for MlKemPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for MlKemCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for MlKemSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for MlKemSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

/// Binding between an `ml-kem` backend parameter set and our constants table.
///
/// Implemented once per security level in the thin `mlkem512`/`mlkem768`/
/// `mlkem1024` modules.
pub trait MlKemLevel: KemCore {
    /// Algorithm name, e.g. "ML-KEM-768"
    const NAME: &'static str;
    /// Byte sizes for this level
    const PARAMS: MlKemParams;
}

/// Generic adapter over one ML-KEM security level
pub struct MlKemKem<K: MlKemLevel> {
    _level: PhantomData<K>,
}

impl<K: MlKemLevel> KemProvider for MlKemKem<K> {
    type PublicKey = MlKemPublicKey;
    type SecretKey = MlKemSecretKey;
    type SharedSecret = MlKemSharedSecret;
    type Ciphertext = MlKemCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        K::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (dk, ek) = K::generate(rng);

        let public_key = MlKemPublicKey(ek.as_bytes().to_vec());
        let secret_key = MlKemSecretKey(dk.as_bytes().to_vec());

        validate::key_generation(
            public_key.0.len() == K::PARAMS.public_key_size
                && secret_key.0.len() == K::PARAMS.secret_key_size,
            K::NAME,
            "backend produced keys of unexpected size",
        )?;

        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        validate::key(
            public_key.0.len() == K::PARAMS.public_key_size,
            K::NAME,
            "encapsulation key length mismatch",
        )?;

        let ek_encoded = Encoded::<K::EncapsulationKey>::try_from(public_key.0.as_slice())
            .map_err(|_| Error::InvalidKey {
                key_type: K::NAME,
                reason: "malformed encapsulation key encoding",
            })?;
        let ek = K::EncapsulationKey::from_bytes(&ek_encoded);

        let (ct, ss) = ek.encapsulate(rng).map_err(|_| Error::Encapsulation {
            algorithm: K::NAME,
            details: "backend refused encapsulation",
        })?;

        let ciphertext = MlKemCiphertext(ct.iter().copied().collect());
        let shared_secret = MlKemSharedSecret(SecretBytes::from_slice(ss.as_ref())?);

        Ok((ciphertext, shared_secret))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        validate::key(
            secret_key.0.len() == K::PARAMS.secret_key_size,
            K::NAME,
            "decapsulation key length mismatch",
        )?;
        validate::ciphertext(
            ciphertext.0.len() == K::PARAMS.ciphertext_size,
            K::NAME,
            "ciphertext length mismatch",
        )?;

        let dk_encoded = Encoded::<K::DecapsulationKey>::try_from(secret_key.0.as_slice())
            .map_err(|_| Error::InvalidKey {
                key_type: K::NAME,
                reason: "malformed decapsulation key encoding",
            })?;
        let dk = K::DecapsulationKey::from_bytes(&dk_encoded);

        let ct = ml_kem::Ciphertext::<K>::try_from(ciphertext.0.as_slice()).map_err(|_| {
            Error::InvalidCiphertext {
                algorithm: K::NAME,
                reason: "ciphertext does not match the parameter set",
            }
        })?;

        // ml-kem decapsulation never rejects loudly (implicit rejection);
        // the error arm exists for the trait contract.
        let ss = dk.decapsulate(&ct).map_err(|_| Error::Decapsulation {
            algorithm: K::NAME,
            details: "backend decapsulation failed",
        })?;

        Ok(MlKemSharedSecret(SecretBytes::from_slice(ss.as_ref())?))
    }
}
