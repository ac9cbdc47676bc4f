//! Greedy one-to-one descriptor matching.
use super::descriptor::Descriptor;
use crate::types::Point;
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

/// A correspondence between descriptor `ai` of the first set and `bi` of
/// the second. `distance` is the L1 descriptor distance at match time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub p: Point,
    pub q: Point,
    pub ai: usize,
    pub bi: usize,
    pub distance: f32,
}

/// Match every descriptor of `a` to its nearest neighbour in `b`, then
/// keep only the best-scoring claim on each `b` descriptor.
///
/// Output is sorted by ascending distance. Some descriptors of `a` may be
/// dropped; no descriptor of `b` is matched twice.
pub fn match_descriptors(a: &[Descriptor], b: &[Descriptor]) -> Vec<Match> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut tentative = nearest_neighbours(a, b);
    // stable: equal distances keep source order
    tentative.sort_by(|m, n| m.distance.total_cmp(&n.distance));

    let mut claimed = vec![false; b.len()];
    let mut matches = Vec::with_capacity(tentative.len());
    for m in tentative {
        if !claimed[m.bi] {
            claimed[m.bi] = true;
            matches.push(m);
        }
    }
    debug!(
        "match_descriptors a={} b={} matches={}",
        a.len(),
        b.len(),
        matches.len()
    );
    matches
}

fn nearest_neighbours(a: &[Descriptor], b: &[Descriptor]) -> Vec<Match> {
    #[cfg(feature = "parallel")]
    {
        a.par_iter()
            .enumerate()
            .map(|(ai, da)| nearest_in(ai, da, b))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        a.iter()
            .enumerate()
            .map(|(ai, da)| nearest_in(ai, da, b))
            .collect()
    }
}

fn nearest_in(ai: usize, da: &Descriptor, b: &[Descriptor]) -> Match {
    let mut bi = 0;
    let mut best = f32::INFINITY;
    for (j, db) in b.iter().enumerate() {
        let d = Descriptor::distance(da, db);
        if d < best {
            best = d;
            bi = j;
        }
    }
    Match {
        p: da.p,
        q: b[bi].p,
        ai,
        bi,
        distance: best,
    }
}
