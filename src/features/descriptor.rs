//! Patch descriptors anchored at detected corners.
use crate::image::PlanarImage;
use crate::types::Point;
use serde::Serialize;

/// Side of the square patch sampled around each corner.
pub const DESCRIPTOR_WINDOW: usize = 5;

/// A corner location and the fingerprint of its neighbourhood.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Descriptor {
    pub p: Point,
    pub data: Vec<f32>,
}

impl Descriptor {
    /// Describe pixel `(x, y)` of `im`.
    ///
    /// For every channel the window values are stored as
    /// `centre − neighbour` (clamped at the borders), channel-major. Removing
    /// the centre value makes the vector insensitive to uniform brightness
    /// offsets between the two exposures.
    pub fn describe(im: &PlanarImage, x: usize, y: usize) -> Self {
        let half = (DESCRIPTOR_WINDOW / 2) as isize;
        let mut data = Vec::with_capacity(DESCRIPTOR_WINDOW * DESCRIPTOR_WINDOW * im.channels());
        for c in 0..im.channels() {
            let centre = im.get(x, y, c);
            for dx in -half..=half {
                for dy in -half..=half {
                    data.push(centre - im.get_clamped(x as isize + dx, y as isize + dy, c));
                }
            }
        }
        Self {
            p: Point::new(x as f32, y as f32),
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// L1 distance between two descriptors of equal length.
    pub fn distance(a: &Descriptor, b: &Descriptor) -> f32 {
        assert_eq!(a.len(), b.len(), "descriptor lengths differ");
        a.data
            .iter()
            .zip(&b.data)
            .map(|(u, v)| (u - v).abs())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;
    use approx::assert_relative_eq;

    fn ramp(w: usize, h: usize, offset: f32) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, offset + 0.01 * (x * x) as f32 + 0.02 * y as f32);
            }
        }
        img
    }

    #[test]
    fn length_covers_every_channel() {
        let im = PlanarImage::new(8, 8, 3);
        let d = Descriptor::describe(&im, 4, 4);
        assert_eq!(d.len(), 75);
        assert_eq!(d.p, Point::new(4.0, 4.0));
    }

    #[test]
    fn centre_entry_is_zero() {
        let im = PlanarImage::from_gray(ramp(10, 10, 0.0));
        let d = Descriptor::describe(&im, 5, 5);
        assert_eq!(d.data[12], 0.0);
        // left column (dx = -2, dy = -2): centre minus value at (3, 3)
        assert_relative_eq!(d.data[0], im.get(5, 5, 0) - im.get(3, 3, 0));
    }

    #[test]
    fn brightness_offset_does_not_change_descriptor() {
        let a = PlanarImage::from_gray(ramp(10, 10, 0.0));
        let b = PlanarImage::from_gray(ramp(10, 10, 0.25));
        let da = Descriptor::describe(&a, 6, 3);
        let db = Descriptor::describe(&b, 6, 3);
        assert!(Descriptor::distance(&da, &db) < 1e-4);
    }

    #[test]
    fn border_pixels_use_clamped_neighbours() {
        let im = PlanarImage::from_gray(ramp(6, 6, 0.0));
        let d = Descriptor::describe(&im, 0, 0);
        assert_eq!(d.len(), 25);
        // dx = -2, dy = -2 clamps onto the corner itself
        assert_eq!(d.data[0], 0.0);
    }

    #[test]
    fn l1_distance() {
        let a = Descriptor {
            p: Point::default(),
            data: vec![1.0, -2.0, 3.0],
        };
        let b = Descriptor {
            p: Point::default(),
            data: vec![0.0, 2.0, 3.5],
        };
        assert_relative_eq!(Descriptor::distance(&a, &b), 5.5);
    }
}
