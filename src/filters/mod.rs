//! Minimal convolution building blocks consumed by the corner detector.
//!
//! - Sobel gradients with clamped borders. Multi-channel inputs produce a
//!   single gradient pair whose responses are summed over the channels.
//! - Separable Gaussian smoothing with a kernel sized from `sigma`
//!   (`floor(6σ)` taps, forced odd, normalised to unit sum).
//!
//! Both passes run in O(W·H·K) with row-wise access on the source planes.

pub mod gaussian;
pub mod grad;

pub use gaussian::{smooth, GaussianKernel, SeparableFilter};
pub use grad::{sobel_gradients, Grad};
