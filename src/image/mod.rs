//! Float image buffers used throughout the registration pipeline.
//!
//! - [`ImageF32`]: one row-major plane (response maps, tensor channels).
//! - [`PlanarImage`]: several equally sized planes, one per colour channel,
//!   with values nominally in `[0, 1]`.
//! - [`sample`]: the cylindrical pre-warp.
//! - [`io`]: thin loaders/savers backed by the `image` crate.
pub mod f32;
pub mod io;
pub mod planar;
pub mod sample;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::planar::PlanarImage;
pub use self::traits::{ImageView, ImageViewMut, Rows};
