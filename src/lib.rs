#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod align;
pub mod diagnostics;
pub mod features;
pub mod homography;
pub mod image;
pub mod ransac;
pub mod types;

// Building blocks: numerics, filtering and tool configuration.
pub mod config;
pub mod filters;
pub mod linalg;

// --- High-level re-exports -------------------------------------------------

// Main entry point: pair aligner + its report.
pub use crate::align::{AlignParams, PairAligner};
pub use crate::diagnostics::AlignReport;

// Pipeline stages that are useful on their own.
pub use crate::features::{match_descriptors, Descriptor, HarrisCornerDetector, Match};
pub use crate::homography::{compute_homography, model_inliers, Homography};
pub use crate::ransac::{Ransac, RansacParams, RansacResult};
pub use crate::types::Point;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use pano_register::prelude::*;
///
/// # fn main() -> Result<(), String> {
/// let a = load_rgb_image(std::path::Path::new("left.jpg"))?;
/// let b = load_rgb_image(std::path::Path::new("right.jpg"))?;
///
/// let aligner = PairAligner::new(AlignParams::default());
/// let report = aligner.align(&a, &b);
/// println!("registered={} inliers={}", report.registered, report.inliers);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::load_rgb_image;
    pub use crate::image::PlanarImage;
    pub use crate::{AlignParams, AlignReport, Homography, PairAligner, Point};
}
