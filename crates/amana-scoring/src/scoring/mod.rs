//! Scoring engines for the reserve.
//!
//! All three scorers work on the same basis-point scale (10000 == 100%) and are
//! pure: given the same inputs and evaluation time they return the same output.

pub mod basis_points;
pub mod compliance;
pub mod hai;
pub mod trust;

pub use basis_points::{WeightSet, WeightsError, MAX_BPS};
pub use compliance::ComplianceScorer;
pub use hai::{HaiCalculator, HaiTracker};
pub use trust::{TrustEngineConfig, TrustScoreEngine};
