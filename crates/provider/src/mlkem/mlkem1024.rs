//! ML-KEM-1024 provider adapter

use super::common::{MlKemKem, MlKemLevel};
use kemguard_params::{MlKemParams, MLKEM1024};

/// ML-KEM-1024 provider backed by the `ml-kem` crate (security category 5)
pub type MlKem1024 = MlKemKem<ml_kem::MlKem1024>;

impl MlKemLevel for ml_kem::MlKem1024 {
    const NAME: &'static str = "ML-KEM-1024";
    const PARAMS: MlKemParams = MLKEM1024;
}
