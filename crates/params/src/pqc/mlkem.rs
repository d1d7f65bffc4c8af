//! Constants for the ML-KEM (FIPS 203) key encapsulation mechanism

/// ML-KEM polynomial degree
pub const MLKEM_N: usize = 256;

/// ML-KEM modulus
pub const MLKEM_Q: u16 = 3329;

/// Rounding offset used when decoding a message bit from a coefficient,
/// i.e. floor(Q / 2)
pub const MLKEM_HALF_Q: u16 = MLKEM_Q / 2;

/// Size of the shared secret in bytes, identical across security levels
pub const MLKEM_SS_BYTES: usize = 32;

/// Structure containing the per-level ML-KEM parameters
pub struct MlKemParams {
    /// Polynomial degree
    pub n: usize,

    /// Modulus
    pub q: u16,

    /// Number of polynomials (module dimension)
    pub k: usize,

    /// Size of the encapsulation (public) key in bytes
    pub public_key_size: usize,

    /// Size of the decapsulation (secret) key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

/// ML-KEM-512 parameters (security category 1)
pub const MLKEM512: MlKemParams = MlKemParams {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 2,
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-768 parameters (security category 3)
pub const MLKEM768: MlKemParams = MlKemParams {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 3,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-1024 parameters (security category 5)
pub const MLKEM1024: MlKemParams = MlKemParams {
    n: MLKEM_N,
    q: MLKEM_Q,
    k: 4,
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: MLKEM_SS_BYTES,
};
