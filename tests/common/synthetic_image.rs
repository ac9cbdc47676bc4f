use pano_register::image::{ImageF32, PlanarImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a simple high-contrast checkerboard with three identical channels.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> PlanarImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let mut plane = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let sum = x / cell + y / cell;
            let val = if sum & 1 == 0 { 32.0 } else { 220.0 };
            plane.set(x, y, val / 255.0);
        }
    }
    PlanarImage::from_planes(vec![plane.clone(), plane.clone(), plane])
}

/// Overlapping axis-aligned rectangles of random colour on a gray background.
pub fn random_blocks(width: usize, height: usize, blocks: usize, seed: u64) -> PlanarImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut im = PlanarImage::new(width, height, 3);
    for c in 0..3 {
        for v in im.channel_mut(c).data.iter_mut() {
            *v = 0.5;
        }
    }
    for _ in 0..blocks {
        let bw = rng.gen_range(12..40);
        let bh = rng.gen_range(12..40);
        let x0 = rng.gen_range(0..width - bw);
        let y0 = rng.gen_range(0..height - bh);
        let colour: [f32; 3] = [rng.gen(), rng.gen(), rng.gen()];
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                for (c, &v) in colour.iter().enumerate() {
                    im.set(x, y, c, v);
                }
            }
        }
    }
    im
}

/// Copy the `w × h` window of `im` whose top-left corner is `(x0, y0)`.
pub fn crop(im: &PlanarImage, x0: usize, y0: usize, w: usize, h: usize) -> PlanarImage {
    assert!(x0 + w <= im.width() && y0 + h <= im.height(), "crop out of bounds");
    let mut out = PlanarImage::new(w, h, im.channels());
    for c in 0..im.channels() {
        for y in 0..h {
            for x in 0..w {
                out.set(x, y, c, im.get(x0 + x, y0 + y, c));
            }
        }
    }
    out
}
