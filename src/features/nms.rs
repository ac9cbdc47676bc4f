//! Windowed non-maximum suppression on a response map.
use crate::image::ImageF32;

/// Value written to suppressed pixels; lower than any real response.
pub const SUPPRESSED: f32 = f32::MIN;

/// Keep only local maxima within a `(2w + 1)²` window.
///
/// A pixel is suppressed when any neighbour (clamped at the borders) is
/// strictly greater. Ties survive, so plateaus are left for the threshold
/// step to decide.
pub fn non_max_suppression(im: &ImageF32, w: usize) -> ImageF32 {
    let mut dst = im.clone();
    let r = w as isize;
    for y in 0..im.h {
        for x in 0..im.w {
            let value = im.get(x, y);
            let dominated = (-r..=r).any(|dy| {
                (-r..=r).any(|dx| im.get_clamped(x as isize + dx, y as isize + dy) > value)
            });
            if dominated {
                dst.set(x, y, SUPPRESSED);
            }
        }
    }
    dst
}
