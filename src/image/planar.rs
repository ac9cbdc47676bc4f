//! Planar multi-channel float image.
//!
//! Each channel is an independent [`ImageF32`] plane of identical size.
//! Channel access hands out borrows, so a channel view never outlives or
//! frees the parent buffer.
use super::ImageF32;

#[derive(Clone, Debug, PartialEq)]
pub struct PlanarImage {
    w: usize,
    h: usize,
    planes: Vec<ImageF32>,
}

impl PlanarImage {
    /// Zero-initialised image with `channels` planes of size `w × h`.
    pub fn new(w: usize, h: usize, channels: usize) -> Self {
        assert!(channels > 0, "image needs at least one channel");
        Self {
            w,
            h,
            planes: (0..channels).map(|_| ImageF32::new(w, h)).collect(),
        }
    }

    /// Assemble an image from existing planes. All planes must share a size.
    pub fn from_planes(planes: Vec<ImageF32>) -> Self {
        assert!(!planes.is_empty(), "image needs at least one channel");
        let (w, h) = (planes[0].w, planes[0].h);
        assert!(
            planes.iter().all(|p| p.w == w && p.h == h),
            "all planes must have the same dimensions"
        );
        Self { w, h, planes }
    }

    /// Wrap a single plane as a one-channel image.
    pub fn from_gray(plane: ImageF32) -> Self {
        Self::from_planes(vec![plane])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn channel(&self, c: usize) -> &ImageF32 {
        &self.planes[c]
    }

    #[inline]
    pub fn channel_mut(&mut self, c: usize) -> &mut ImageF32 {
        &mut self.planes[c]
    }

    pub fn planes(&self) -> &[ImageF32] {
        &self.planes
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, c: usize) -> f32 {
        self.planes[c].get(x, y)
    }

    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize, c: usize) -> f32 {
        self.planes[c].get_clamped(x, y)
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, c: usize, v: f32) {
        self.planes[c].set(x, y, v);
    }
}
