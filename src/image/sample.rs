//! Cylindrical pre-warp used for wide panoramas.
use super::PlanarImage;

/// Re-project `im` onto a cylinder of focal length `focal` (pixels).
///
/// Output has the input's size; pixels whose source falls outside the input
/// stay at zero, which produces the characteristic black side borders.
pub fn cylindrical_project(im: &PlanarImage, focal: f32) -> PlanarImage {
    assert!(focal > 0.0, "focal length must be positive");
    let (w, h) = (im.width(), im.height());
    let mut out = PlanarImage::new(w, h, im.channels());
    let cx = w as f32 / 2.0;
    let cy = h as f32 / 2.0;

    for y in 0..h {
        for x in 0..w {
            let theta = (x as f32 - cx) / focal;
            let height = (y as f32 - cy) / focal;
            let (sin_t, cos_t) = theta.sin_cos();
            let px = focal * sin_t / cos_t + cx;
            let py = focal * height / cos_t + cy;
            if px < 0.0 || py < 0.0 || px >= w as f32 || py >= h as f32 {
                continue;
            }
            let (sx, sy) = (px as usize, py as usize);
            for c in 0..im.channels() {
                out.set(x, y, c, im.get(sx, sy, c));
            }
        }
    }
    out
}
