//! ML-KEM-768 provider adapter

use super::common::{MlKemKem, MlKemLevel};
use kemguard_params::{MlKemParams, MLKEM768};

/// ML-KEM-768 provider backed by the `ml-kem` crate (security category 3)
pub type MlKem768 = MlKemKem<ml_kem::MlKem768>;

impl MlKemLevel for ml_kem::MlKem768 {
    const NAME: &'static str = "ML-KEM-768";
    const PARAMS: MlKemParams = MLKEM768;
}
