use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Sampled 1D Gaussian with `floor(6σ)` taps (odd), normalised to unit sum.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianKernel {
    pub fn new(sigma: f32) -> Self {
        assert!(sigma > 0.0, "gaussian sigma must be positive");
        let mut size = (6.0 * sigma).floor() as usize;
        if size % 2 == 0 {
            size += 1;
        }
        let radius = (size / 2) as f32;
        let two_sigma2 = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (0..size)
            .map(|i| {
                let d = i as f32 - radius;
                (-(d * d) / two_sigma2).exp()
            })
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { sigma, taps }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve `src` with `filter` horizontally, then vertically.
///
/// Borders replicate the nearest pixel.
pub fn smooth<F: SeparableFilter + ?Sized>(src: &ImageF32, filter: &F) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut tmp = ImageF32::new(w, h);
    let mut dst = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return dst;
    }
    let taps = filter.taps();
    assert!(!taps.is_empty(), "filter must provide at least one tap");
    let radius = (taps.len() / 2) as isize;

    for y in 0..h {
        let src_row = src.row(y);
        let tmp_row = tmp.row_mut(y);
        for (x, out) in tmp_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, w);
                acc += tap * src_row[sx];
            }
            *out = acc;
        }
    }

    for y in 0..h {
        let dst_row = dst.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius, h);
            let tmp_row = tmp.row(sy);
            for (out, &v) in dst_row.iter_mut().zip(tmp_row) {
                *out += tap * v;
            }
        }
    }
    dst
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
