//! Corner detection, patch descriptors and descriptor matching.
//!
//! The detector runs the classic Harris pipeline on a planar colour image:
//! - [`structure::harris_structure_matrix`] builds the Gaussian-weighted
//!   second-moment tensor from channel-summed Sobel gradients.
//! - [`response::cornerness_response`] scores it with a [`CornerScore`]
//!   policy ([`HarrisScore`] or [`ShiTomasiScore`]).
//! - [`nms::non_max_suppression`] keeps windowed local maxima.
//! - [`descriptor::Descriptor::describe`] samples a 5×5 centre-subtracted
//!   patch around every surviving pixel above threshold.
//!
//! [`matching::match_descriptors`] then pairs two descriptor sets greedily
//! and injectively.
pub mod descriptor;
pub mod detector;
pub mod matching;
pub mod nms;
pub mod response;
pub mod structure;

pub use descriptor::{Descriptor, DESCRIPTOR_WINDOW};
pub use detector::{describe_peaks, harris_corner_detector, CornerParams, HarrisCornerDetector};
pub use matching::{match_descriptors, Match};
pub use nms::{non_max_suppression, SUPPRESSED};
pub use response::{cornerness_response, CornerScore, HarrisScore, ScoreKind, ShiTomasiScore};
pub use structure::{harris_structure_matrix, StructureTensor};
