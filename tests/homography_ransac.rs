use pano_register::features::{match_descriptors, Descriptor, Match};
use pano_register::ransac::{randomize_matches, RansacParams};
use pano_register::{compute_homography, model_inliers, Homography, Point, Ransac};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn correspondence(i: usize, p: Point, q: Point) -> Match {
    Match {
        p,
        q,
        ai: i,
        bi: i,
        distance: 0.0,
    }
}

#[test]
fn rectangle_translation_is_recovered() {
    let corners = [(0.0, 0.0), (100.0, 0.0), (100.0, 20.0), (0.0, 20.0)];
    let mut matches: Vec<Match> = corners
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| correspondence(i, Point::new(x, y), Point::new(x + 100.0, y + 100.0)))
        .collect();

    let h = compute_homography(&matches).expect("solvable");
    let expected = Homography::translation(100.0, 100.0);
    for (got, want) in h.matrix().iter().zip(expected.matrix().iter()) {
        assert!((got - want).abs() < 1e-3, "{} vs {}", got, want);
    }
    assert_eq!(model_inliers(&h, &mut matches, 2.0), 4);
    assert_eq!(model_inliers(&h, &mut matches, 2.0), 4);
}

#[test]
fn projection_round_trips_through_inverse() {
    let h = Homography::translation(-12.0, 40.0).compose(&Homography(nalgebra::Matrix3::new(
        1.2, 0.1, 0.0, //
        -0.1, 0.9, 0.0, //
        2e-4, 1e-4, 1.0,
    )));
    let inv = h.inverse().expect("invertible");
    for p in [Point::new(3.0, 4.0), Point::new(250.0, 80.0), Point::new(60.0, 190.0)] {
        let back = inv.project(&h.project(&p));
        assert!(Point::distance(&back, &p) < 1e-2, "{p:?} came back as {back:?}");
    }
}

#[test]
fn matching_is_injective_on_duplicated_descriptors() {
    let make = |x: f32, v: f32| Descriptor {
        p: Point::new(x, 0.0),
        data: vec![v, -v, 2.0 * v],
    };
    let a: Vec<Descriptor> = (0..20).map(|i| make(i as f32, (i % 4) as f32)).collect();
    let b: Vec<Descriptor> = (0..6).map(|i| make(i as f32, i as f32 * 0.9)).collect();
    let matches = match_descriptors(&a, &b);

    let mut seen = vec![false; b.len()];
    for m in &matches {
        assert!(!seen[m.bi], "destination {} claimed twice", m.bi);
        seen[m.bi] = true;
        assert_eq!(m.distance, Descriptor::distance(&a[m.ai], &b[m.bi]));
    }
    assert!(matches.len() <= b.len());
}

#[test]
fn ransac_converges_on_translated_set_with_outliers() {
    let shift = Point::new(-37.0, 18.5);
    let mut matches = Vec::new();
    for k in 0..36usize {
        let p = Point::new((k % 6) as f32 * 40.0 + (k % 5) as f32, (k / 6) as f32 * 30.0);
        matches.push(correspondence(k, p, Point::new(p.x + shift.x, p.y + shift.y)));
    }
    for k in 0..12usize {
        let p = Point::new(((k * 41) % 200) as f32, ((k * 23) % 150) as f32);
        let q = Point::new(p.x + 80.0 - (k * 13 % 30) as f32, p.y - 70.0 + (k * 7 % 20) as f32);
        matches.push(correspondence(36 + k, p, q));
    }
    let mut rng = StdRng::seed_from_u64(11);
    randomize_matches(&mut matches, &mut rng);

    let params = RansacParams {
        thresh: 2.0,
        iterations: 10_000,
        cutoff: 30,
        sample_size: 4,
    };
    let result = Ransac::new(params, rng).run(&mut matches);
    let h = result.homography.expect("consensus");
    assert_eq!(result.inliers, 36);
    assert!(matches[..36].iter().all(|m| m.ai < 36));

    let q = h.project(&Point::new(100.0, 100.0));
    assert!((q.x - 63.0).abs() < 0.1 && (q.y - 118.5).abs() < 0.1, "{q:?}");
}
