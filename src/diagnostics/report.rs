use super::timing::TimingBreakdown;
use crate::features::Match;
use crate::homography::Homography;
use nalgebra::Matrix3;
use serde::Serialize;

/// Size and channel count of one input image, after any pre-warp.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

/// Everything an alignment run produced.
///
/// `matches` is partitioned against `homography`: the first `inliers`
/// entries agree with it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignReport {
    pub input_a: InputDescriptor,
    pub input_b: InputDescriptor,
    pub corners_a: usize,
    pub corners_b: usize,
    pub registered: bool,
    /// Row-major matrix mapping points of image A onto image B.
    pub homography: Option<[[f64; 3]; 3]>,
    pub inliers: usize,
    pub ransac_iterations: usize,
    pub matches: Vec<Match>,
    pub timings: TimingBreakdown,
}

impl AlignReport {
    pub fn homography(&self) -> Option<Homography> {
        self.homography
            .map(|rows| Homography(Matrix3::from_fn(|r, c| rows[r][c])))
    }

    pub fn inlier_matches(&self) -> &[Match] {
        &self.matches[..self.inliers.min(self.matches.len())]
    }
}
