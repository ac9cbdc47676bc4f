//! RANSAC search for the homography best supported by a set of matches.
//!
//! Each iteration shuffles the matches, fits a model to the leading
//! `sample_size` entries and scores it against every match. A model that
//! beats the best inlier count so far is refit on all of its inliers and
//! becomes the new best; the search ends early once the best count exceeds
//! `cutoff`.
use crate::features::Match;
use crate::homography::{compute_homography, model_inliers, Homography};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

/// Knobs of the consensus search.
///
/// - `thresh`: max reprojection error in pixels for an inlier (typical: 2).
/// - `iterations`: sampling budget (typical: 10000).
/// - `cutoff`: stop once more than this many inliers agree (typical: 30).
/// - `sample_size`: matches per minimal sample, at least 4.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RansacParams {
    pub thresh: f32,
    pub iterations: usize,
    pub cutoff: usize,
    pub sample_size: usize,
}

impl Default for RansacParams {
    fn default() -> Self {
        Self {
            thresh: 2.0,
            iterations: 10_000,
            cutoff: 30,
            sample_size: 4,
        }
    }
}

/// Outcome of a search. `inliers` counts the leading entries of the match
/// list that agree with `homography`.
#[derive(Clone, Debug)]
pub struct RansacResult {
    pub homography: Option<Homography>,
    pub inliers: usize,
    pub iterations: usize,
}

/// In-place Fisher–Yates shuffle.
pub fn randomize_matches<R: Rng + ?Sized>(matches: &mut [Match], rng: &mut R) {
    for i in (1..matches.len()).rev() {
        let j = rng.gen_range(0..=i);
        matches.swap(i, j);
    }
}

/// Run the search with an explicit random source.
///
/// On return `matches` is partitioned against the returned homography,
/// inliers first.
pub fn ransac<R: Rng + ?Sized>(
    matches: &mut [Match],
    params: &RansacParams,
    rng: &mut R,
) -> RansacResult {
    let n = params.sample_size.max(4);
    if matches.len() < n {
        debug!(
            "ransac: {} matches, need at least {n}; skipping",
            matches.len()
        );
        return RansacResult {
            homography: None,
            inliers: 0,
            iterations: 0,
        };
    }

    let mut best: Option<Homography> = None;
    let mut best_count = 0usize;
    let mut iterations = 0usize;
    for it in 0..params.iterations {
        iterations = it + 1;
        randomize_matches(matches, rng);
        let Some(h) = compute_homography(&matches[..n]) else {
            continue;
        };
        let count = model_inliers(&h, matches, params.thresh);
        if count <= best_count {
            continue;
        }
        let Some(refit) = compute_homography(&matches[..count]) else {
            continue;
        };
        best_count = model_inliers(&refit, matches, params.thresh);
        best = Some(refit);
        debug!("ransac iter={it} sample_inliers={count} best={best_count}");
        if best_count > params.cutoff {
            debug!("ransac: cutoff {} exceeded after {iterations} iterations", params.cutoff);
            break;
        }
    }

    if let Some(h) = &best {
        best_count = model_inliers(h, matches, params.thresh);
    }
    debug!(
        "ransac done matches={} inliers={best_count} iterations={iterations} found={}",
        matches.len(),
        best.is_some()
    );
    RansacResult {
        homography: best,
        inliers: best_count,
        iterations,
    }
}

/// RANSAC driver owning its random source.
pub struct Ransac<R: Rng> {
    params: RansacParams,
    rng: R,
}

impl<R: Rng> Ransac<R> {
    pub fn new(params: RansacParams, rng: R) -> Self {
        Self { params, rng }
    }

    pub fn params(&self) -> &RansacParams {
        &self.params
    }

    pub fn run(&mut self, matches: &mut [Match]) -> RansacResult {
        ransac(matches, &self.params, &mut self.rng)
    }
}

impl Ransac<StdRng> {
    /// Reproducible driver backed by a seeded [`StdRng`].
    pub fn from_seed(params: RansacParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}
