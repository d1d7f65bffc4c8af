//! ML-KEM-512 provider adapter

use super::common::{MlKemKem, MlKemLevel};
use kemguard_params::{MlKemParams, MLKEM512};

/// ML-KEM-512 provider backed by the `ml-kem` crate (security category 1)
pub type MlKem512 = MlKemKem<ml_kem::MlKem512>;

impl MlKemLevel for ml_kem::MlKem512 {
    const NAME: &'static str = "ML-KEM-512";
    const PARAMS: MlKemParams = MLKEM512;
}
