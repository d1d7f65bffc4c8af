//! Statistical timing analysis for constant-time claims

mod tester;

pub use tester::{TimingAnalysis, TimingTester};
