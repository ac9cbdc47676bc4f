//! Two-image registration: corners → descriptors → matches → RANSAC.
use crate::diagnostics::{AlignReport, InputDescriptor, TimingBreakdown};
use crate::features::{match_descriptors, CornerParams, HarrisCornerDetector};
use crate::image::sample::cylindrical_project;
use crate::image::PlanarImage;
use crate::ransac::{Ransac, RansacParams};
use log::debug;
use serde::Deserialize;
use std::borrow::Cow;
use std::time::Instant;

/// Parameters of a full alignment run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AlignParams {
    pub corners: CornerParams,
    pub ransac: RansacParams,
    /// Minimum inlier count for the pair to count as registered.
    pub min_inliers: usize,
    /// Project both images onto a cylinder of this focal length (pixels)
    /// before detection. Useful for wide rotating-camera panoramas.
    pub cylindrical_focal: Option<f32>,
    /// Seed of the RANSAC random source; equal seeds give equal results.
    pub seed: u64,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            corners: CornerParams::default(),
            ransac: RansacParams::default(),
            min_inliers: 8,
            cylindrical_focal: None,
            seed: 0,
        }
    }
}

pub struct PairAligner {
    params: AlignParams,
    detector: HarrisCornerDetector,
}

impl AlignParams {
    /// Reject values that would make a stage panic.
    pub fn validate(&self) -> Result<(), String> {
        let sigma = self.corners.sigma;
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(format!("corners.sigma must be positive, got {sigma}"));
        }
        if !self.corners.thresh.is_finite() {
            return Err(format!("corners.thresh must be finite, got {}", self.corners.thresh));
        }
        let thresh = self.ransac.thresh;
        if !(thresh.is_finite() && thresh > 0.0) {
            return Err(format!("ransac.thresh must be positive, got {thresh}"));
        }
        if let Some(f) = self.cylindrical_focal {
            if !(f.is_finite() && f > 0.0) {
                return Err(format!("cylindrical_focal must be positive, got {f}"));
            }
        }
        Ok(())
    }
}

impl PairAligner {
    pub fn new(params: AlignParams) -> Self {
        let detector = HarrisCornerDetector::new(params.corners.clone());
        Self { params, detector }
    }

    pub fn params(&self) -> &AlignParams {
        &self.params
    }

    /// Apply the configured pre-warp, if any.
    pub fn prepare<'a>(&self, im: &'a PlanarImage) -> Cow<'a, PlanarImage> {
        match self.params.cylindrical_focal {
            Some(f) if f > 0.0 => Cow::Owned(cylindrical_project(im, f)),
            _ => Cow::Borrowed(im),
        }
    }

    /// Estimate the homography mapping image `a` onto image `b`.
    pub fn align(&self, a: &PlanarImage, b: &PlanarImage) -> AlignReport {
        let total_start = Instant::now();
        let mut stages: Vec<(&str, f64)> = Vec::new();

        let warp_start = Instant::now();
        let a = self.prepare(a);
        let b = self.prepare(b);
        if self.params.cylindrical_focal.is_some() {
            stages.push(("cylindrical", elapsed_ms(warp_start)));
        }

        let start = Instant::now();
        let corners_a = self.detector.detect(&a);
        stages.push(("corners_a", elapsed_ms(start)));
        let start = Instant::now();
        let corners_b = self.detector.detect(&b);
        stages.push(("corners_b", elapsed_ms(start)));

        let start = Instant::now();
        let mut matches = match_descriptors(&corners_a, &corners_b);
        stages.push(("matching", elapsed_ms(start)));

        let start = Instant::now();
        let mut ransac = Ransac::from_seed(self.params.ransac.clone(), self.params.seed);
        let result = ransac.run(&mut matches);
        stages.push(("ransac", elapsed_ms(start)));

        let registered = result.homography.is_some() && result.inliers >= self.params.min_inliers;
        let latency = elapsed_ms(total_start);
        debug!(
            "PairAligner::align done corners=({}, {}) matches={} inliers={} registered={} latency_ms={:.3}",
            corners_a.len(),
            corners_b.len(),
            matches.len(),
            result.inliers,
            registered,
            latency
        );

        let mut timings = TimingBreakdown::with_total(latency);
        for (label, ms) in stages {
            timings.push(label, ms);
        }
        AlignReport {
            input_a: describe_input(&a),
            input_b: describe_input(&b),
            corners_a: corners_a.len(),
            corners_b: corners_b.len(),
            registered,
            homography: result.homography.map(|h| h.rows()),
            inliers: result.inliers,
            ransac_iterations: result.iterations,
            matches,
            timings,
        }
    }
}

fn describe_input(im: &PlanarImage) -> InputDescriptor {
    InputDescriptor {
        width: im.width(),
        height: im.height(),
        channels: im.channels(),
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
