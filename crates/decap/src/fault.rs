//! Internal anomaly taxonomy.

/// What went wrong inside the hardened decapsulation pipeline.
///
/// Components report these so the orchestrator knows a check tripped, but the
/// taxonomy stops at the crate boundary: `HardenedDecapsulator` converts every
/// variant into a fallback secret and exposes no error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// The two redundant decode formulations disagreed
    Decode,
    /// The re-encryption/confirmation binding did not hold
    Consistency,
    /// The underlying provider's decapsulation itself failed
    Provider,
}
