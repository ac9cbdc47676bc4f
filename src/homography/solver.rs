use super::Homography;
use crate::features::Match;
use crate::linalg::{lls_solve, Matrix};
use crate::types::Point;
use nalgebra::Matrix3;

/// Fit the 8-parameter homography (bottom-right entry fixed to 1) that maps
/// every `p` onto its `q`, in the least-squares sense.
///
/// Each correspondence `(x, y) → (xp, yp)` contributes the rows
/// `[x, y, 1, 0, 0, 0, -x·xp, -y·xp] = xp` and
/// `[0, 0, 0, x, y, 1, -x·yp, -y·yp] = yp`.
/// Returns `None` for fewer than four matches or a degenerate system.
pub fn compute_homography(matches: &[Match]) -> Option<Homography> {
    if matches.len() < 4 {
        return None;
    }
    let n = matches.len();
    let mut m = Matrix::zeros(2 * n, 8);
    let mut b = Matrix::zeros(2 * n, 1);
    for (i, mt) in matches.iter().enumerate() {
        let (x, y) = (mt.p.x as f64, mt.p.y as f64);
        let (xp, yp) = (mt.q.x as f64, mt.q.y as f64);
        let r = 2 * i;
        m[(r, 0)] = x;
        m[(r, 1)] = y;
        m[(r, 2)] = 1.0;
        m[(r, 6)] = -x * xp;
        m[(r, 7)] = -y * xp;
        b[(r, 0)] = xp;

        m[(r + 1, 3)] = x;
        m[(r + 1, 4)] = y;
        m[(r + 1, 5)] = 1.0;
        m[(r + 1, 6)] = -x * yp;
        m[(r + 1, 7)] = -y * yp;
        b[(r + 1, 0)] = yp;
    }

    let a = lls_solve(&m, &b)?;
    let h = Matrix3::new(
        a[(0, 0)], a[(1, 0)], a[(2, 0)], //
        a[(3, 0)], a[(4, 0)], a[(5, 0)], //
        a[(6, 0)], a[(7, 0)], 1.0,
    );
    if h.iter().all(|v| v.is_finite()) {
        Some(Homography(h))
    } else {
        None
    }
}

/// Count the matches whose projected `p` lands within `thresh` of `q`.
///
/// Reorders `matches` so the inliers come first; relative order inside
/// both groups is preserved.
pub fn model_inliers(h: &Homography, matches: &mut [Match], thresh: f32) -> usize {
    let (inliers, outliers): (Vec<Match>, Vec<Match>) = matches
        .iter()
        .partition(|m| Point::distance(&h.project(&m.p), &m.q) < thresh);
    let count = inliers.len();
    for (slot, m) in matches.iter_mut().zip(inliers.into_iter().chain(outliers)) {
        *slot = m;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shifted(points: &[(f32, f32)], dx: f32, dy: f32) -> Vec<Match> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Match {
                p: Point::new(x, y),
                q: Point::new(x + dx, y + dy),
                ai: i,
                bi: i,
                distance: 0.0,
            })
            .collect()
    }

    #[test]
    fn recovers_translation_from_rectangle() {
        let mut matches = shifted(&[(0.0, 0.0), (100.0, 0.0), (100.0, 20.0), (0.0, 20.0)], 100.0, 100.0);
        let h = compute_homography(&matches).expect("four points in general position");
        let expected = Homography::translation(100.0, 100.0);
        for (got, want) in h.0.iter().zip(expected.0.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-3);
        }
        assert_eq!(model_inliers(&h, &mut matches, 2.0), 4);
    }

    #[test]
    fn too_few_matches() {
        let matches = shifted(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)], 1.0, 1.0);
        assert!(compute_homography(&matches).is_none());
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let matches = shifted(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], 5.0, 5.0);
        assert!(compute_homography(&matches).is_none());
    }

    #[test]
    fn overdetermined_fit_recovers_projective_map() {
        let truth = Homography(Matrix3::new(
            1.05, 0.02, 7.0, //
            -0.03, 0.98, -3.0, //
            1e-4, -5e-5, 1.0,
        ));
        let matches: Vec<Match> = (0..12)
            .map(|i| {
                let p = Point::new((i % 4) as f32 * 30.0, (i / 4) as f32 * 25.0 + (i % 3) as f32);
                Match {
                    p,
                    q: truth.project(&p),
                    ai: i,
                    bi: i,
                    distance: 0.0,
                }
            })
            .collect();
        let h = compute_homography(&matches).expect("well conditioned");
        for m in &matches {
            let q = h.project(&m.p);
            assert!(Point::distance(&q, &m.q) < 0.05);
        }
    }

    #[test]
    fn inliers_lead_and_count_is_idempotent() {
        let mut matches = shifted(&[(0.0, 0.0), (10.0, 0.0), (20.0, 5.0), (3.0, 9.0)], 2.0, 0.0);
        // corrupt the first and third destinations
        matches[0].q = Point::new(50.0, 50.0);
        matches[2].q = Point::new(-40.0, 3.0);
        let h = Homography::translation(2.0, 0.0);

        let first = model_inliers(&h, &mut matches, 1.0);
        assert_eq!(first, 2);
        assert_eq!(matches[0].ai, 1);
        assert_eq!(matches[1].ai, 3);
        assert_eq!(matches[2].ai, 0);
        assert_eq!(matches[3].ai, 2);

        let second = model_inliers(&h, &mut matches, 1.0);
        assert_eq!(second, first);
        assert_eq!(matches.iter().map(|m| m.ai).collect::<Vec<_>>(), vec![1, 3, 0, 2]);
    }
}
