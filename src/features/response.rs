//! Cornerness scoring policies over a structure tensor.
//!
//! Both policies read the symmetric 2×2 tensor `[[xx, xy], [xy, yy]]` at
//! every pixel and produce one scalar; larger means more corner-like.
use super::structure::StructureTensor;
use crate::image::ImageF32;
use serde::Deserialize;

/// Scalar cornerness score of a 2×2 symmetric structure tensor.
pub trait CornerScore: Send + Sync {
    fn score(&self, xx: f32, yy: f32, xy: f32) -> f32;
}

/// Harris & Stephens: `det(S) − α·trace(S)²`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarrisScore {
    pub alpha: f32,
}

impl Default for HarrisScore {
    fn default() -> Self {
        Self { alpha: 0.06 }
    }
}

impl CornerScore for HarrisScore {
    #[inline]
    fn score(&self, xx: f32, yy: f32, xy: f32) -> f32 {
        let det = xx * yy - xy * xy;
        let trace = xx + yy;
        det - self.alpha * trace * trace
    }
}

/// Shi & Tomasi: the smaller eigenvalue, multiplied by `scale` so that the
/// same thresholds work as for [`HarrisScore`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiTomasiScore {
    pub scale: f32,
}

impl Default for ShiTomasiScore {
    fn default() -> Self {
        Self { scale: 1000.0 }
    }
}

impl CornerScore for ShiTomasiScore {
    #[inline]
    fn score(&self, xx: f32, yy: f32, xy: f32) -> f32 {
        let trace = xx + yy;
        let diff = xx - yy;
        let disc = (diff * diff + 4.0 * xy * xy).sqrt();
        self.scale * 0.5 * (trace - disc)
    }
}

/// Serializable selector for the scoring policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    #[default]
    Harris,
    ShiTomasi,
}

impl ScoreKind {
    pub fn build(self) -> Box<dyn CornerScore> {
        match self {
            ScoreKind::Harris => Box::new(HarrisScore::default()),
            ScoreKind::ShiTomasi => Box::new(ShiTomasiScore::default()),
        }
    }
}

/// Evaluate `scorer` at every pixel of `s`.
pub fn cornerness_response(s: &StructureTensor, scorer: &dyn CornerScore) -> ImageF32 {
    let mut r = ImageF32::new(s.width(), s.height());
    for (i, out) in r.data.iter_mut().enumerate() {
        let (xx, yy, xy) = s.at(i);
        *out = scorer.score(xx, yy, xy);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn harris_formula() {
        let h = HarrisScore::default();
        // det = 6 - 1 = 5, trace = 5 -> 5 - 0.06 * 25 = 3.5
        assert_relative_eq!(h.score(2.0, 3.0, 1.0), 3.5, epsilon = 1e-6);
        // pure edge: one large eigenvalue gives a negative response
        assert!(h.score(10.0, 0.0, 0.0) < 0.0);
    }

    #[test]
    fn shi_tomasi_picks_smaller_eigenvalue() {
        let st = ShiTomasiScore { scale: 1.0 };
        assert_relative_eq!(st.score(4.0, 4.0, 0.0), 4.0);
        assert_relative_eq!(st.score(5.0, 1.0, 0.0), 1.0);
        // [[2, 1], [1, 2]] has eigenvalues 1 and 3.
        assert_relative_eq!(st.score(2.0, 2.0, 1.0), 1.0, epsilon = 1e-6);
        let scaled = ShiTomasiScore::default();
        assert_relative_eq!(scaled.score(2.0, 2.0, 1.0), 1000.0, epsilon = 1e-3);
    }

    #[test]
    fn response_evaluates_every_pixel() {
        let s = StructureTensor {
            ixx: ImageF32::filled(3, 2, 2.0),
            iyy: ImageF32::filled(3, 2, 3.0),
            ixy: ImageF32::filled(3, 2, 1.0),
        };
        let r = cornerness_response(&s, &HarrisScore::default());
        assert_eq!((r.w, r.h), (3, 2));
        for &v in &r.data {
            assert_relative_eq!(v, 3.5, epsilon = 1e-6);
        }
    }
}
