//! Per-pixel second-moment (structure) tensor.
use crate::filters::{smooth, sobel_gradients, GaussianKernel};
use crate::image::{ImageF32, PlanarImage};

/// Smoothed gradient products: one plane each for Ix², Iy² and IxIy.
#[derive(Clone, Debug)]
pub struct StructureTensor {
    pub ixx: ImageF32,
    pub iyy: ImageF32,
    pub ixy: ImageF32,
}

impl StructureTensor {
    pub fn width(&self) -> usize {
        self.ixx.w
    }

    pub fn height(&self) -> usize {
        self.ixx.h
    }

    /// Tensor entries `(xx, yy, xy)` at linear pixel index `i`.
    #[inline]
    pub fn at(&self, i: usize) -> (f32, f32, f32) {
        (self.ixx.data[i], self.iyy.data[i], self.ixy.data[i])
    }
}

/// Build the structure tensor of `im`, weighting neighbourhoods with a
/// Gaussian of standard deviation `sigma`.
pub fn harris_structure_matrix(im: &PlanarImage, sigma: f32) -> StructureTensor {
    let grad = sobel_gradients(im);
    let (w, h) = (im.width(), im.height());
    let mut ixx = ImageF32::new(w, h);
    let mut iyy = ImageF32::new(w, h);
    let mut ixy = ImageF32::new(w, h);
    for (i, (&gx, &gy)) in grad.gx.data.iter().zip(&grad.gy.data).enumerate() {
        ixx.data[i] = gx * gx;
        iyy.data[i] = gy * gy;
        ixy.data[i] = gx * gy;
    }

    let kernel = GaussianKernel::new(sigma);
    StructureTensor {
        ixx: smooth(&ixx, &kernel),
        iyy: smooth(&iyy, &kernel),
        ixy: smooth(&ixy, &kernel),
    }
}
