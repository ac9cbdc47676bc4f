//! Sobel image gradients on planar float images.
//!
//! Convolves a 3×3 kernel pair (`X` and `Y`) with border clamping. For an
//! image with several channels the per-channel responses are accumulated
//! into one `gx`/`gy` pair, so colour edges reinforce each other.
use crate::image::{ImageF32, ImageView, ImageViewMut, PlanarImage};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
}

fn accumulate_channel(l: &ImageF32, gx: &mut ImageF32, gy: &mut ImageF32) {
    let w = l.w;
    let h = l.h;
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_x = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                sum_x += yy_row[x_idx[0]] * kx_row[0]
                    + yy_row[x_idx[1]] * kx_row[1]
                    + yy_row[x_idx[2]] * kx_row[2];
            }
            out_gx[x] += sum_x;
        }
        let out_gy = gy.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let ky_row = &SOBEL_KERNEL_Y[ky];
                sum_y += yy_row[x_idx[0]] * ky_row[0]
                    + yy_row[x_idx[1]] * ky_row[1]
                    + yy_row[x_idx[2]] * ky_row[2];
            }
            out_gy[x] += sum_y;
        }
    }
}

/// Compute channel-summed Sobel gradients of a planar image.
pub fn sobel_gradients(im: &PlanarImage) -> Grad {
    let (w, h) = (im.width(), im.height());
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Grad { gx, gy };
    }
    for plane in im.planes() {
        accumulate_channel(plane, &mut gx, &mut gy);
    }
    Grad { gx, gy }
}
