//! Harris-style corner detector producing patch descriptors.
//!
//! Pipeline: structure tensor → cornerness score → windowed NMS → threshold
//! → one [`Descriptor`] per surviving pixel, emitted in raster order.
use super::descriptor::Descriptor;
use super::nms::non_max_suppression;
use super::response::{cornerness_response, CornerScore, ScoreKind};
use super::structure::harris_structure_matrix;
use crate::image::{ImageF32, PlanarImage};
use log::debug;
use serde::Deserialize;

/// Knobs of the corner detector.
///
/// - `sigma`: Gaussian weighting of the structure tensor (typical: 2).
/// - `thresh`: minimum post-NMS score for a corner (typical: 1–50 for
///   `[0, 1]`-valued colour images).
/// - `nms`: NMS half-window in pixels (typical: 3).
/// - `score`: cornerness policy.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CornerParams {
    pub sigma: f32,
    pub thresh: f32,
    pub nms: usize,
    pub score: ScoreKind,
}

impl Default for CornerParams {
    fn default() -> Self {
        Self {
            sigma: 2.0,
            thresh: 50.0,
            nms: 3,
            score: ScoreKind::Harris,
        }
    }
}

pub struct HarrisCornerDetector {
    params: CornerParams,
    scorer: Box<dyn CornerScore>,
}

impl HarrisCornerDetector {
    /// Create a detector whose scoring policy is taken from `params.score`.
    pub fn new(params: CornerParams) -> Self {
        let scorer = params.score.build();
        Self { params, scorer }
    }

    /// Create a detector with a caller-supplied scoring policy.
    pub fn with_scorer(params: CornerParams, scorer: Box<dyn CornerScore>) -> Self {
        Self { params, scorer }
    }

    pub fn params(&self) -> &CornerParams {
        &self.params
    }

    /// Post-NMS cornerness map of `im`.
    pub fn response(&self, im: &PlanarImage) -> ImageF32 {
        let s = harris_structure_matrix(im, self.params.sigma);
        let r = cornerness_response(&s, self.scorer.as_ref());
        non_max_suppression(&r, self.params.nms)
    }

    /// Detect corners in `im` and describe each of them.
    pub fn detect(&self, im: &PlanarImage) -> Vec<Descriptor> {
        let response = self.response(im);
        let corners = describe_peaks(im, &response, self.params.thresh);
        debug!(
            "HarrisCornerDetector::detect w={} h={} c={} corners={}",
            im.width(),
            im.height(),
            im.channels(),
            corners.len()
        );
        corners
    }
}

/// Describe every pixel whose `response` exceeds `thresh`, in raster order.
pub fn describe_peaks(im: &PlanarImage, response: &ImageF32, thresh: f32) -> Vec<Descriptor> {
    assert!(
        response.w == im.width() && response.h == im.height(),
        "response map must match the image size"
    );
    let mut out = Vec::new();
    for y in 0..response.h {
        for x in 0..response.w {
            if response.get(x, y) > thresh {
                out.push(Descriptor::describe(im, x, y));
            }
        }
    }
    out
}

/// One-shot Harris detection with the default scoring policy.
pub fn harris_corner_detector(
    im: &PlanarImage,
    sigma: f32,
    thresh: f32,
    nms: usize,
) -> Vec<Descriptor> {
    HarrisCornerDetector::new(CornerParams {
        sigma,
        thresh,
        nms,
        score: ScoreKind::Harris,
    })
    .detect(im)
}
