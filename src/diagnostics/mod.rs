//! Serializable reports produced by [`crate::PairAligner`].
//!
//! `AlignReport` carries the registration outcome together with the
//! partitioned match list and a `TimingBreakdown` of every stage.

pub mod report;
pub mod timing;

pub use report::{AlignReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
