//! I/O helpers for colour images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into a 3-channel planar float image.
//! - `load_gray_image`: read an image into a 1-channel planar float image.
//! - `save_planar_image`: write a 1- or 3-channel planar image to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, PlanarImage};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk as RGB planes with values in [0, 1].
pub fn load_rgb_image(path: &Path) -> Result<PlanarImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut out = PlanarImage::new(w, h, 3);
    for (x, y, px) in img.enumerate_pixels() {
        for c in 0..3 {
            out.set(x as usize, y as usize, c, px[c] as f32 / 255.0);
        }
    }
    Ok(out)
}

/// Load an image from disk and convert to a single grayscale plane in [0, 1].
pub fn load_gray_image(path: &Path) -> Result<PlanarImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let (w, h) = (img.width() as usize, img.height() as usize);
    let data = img.into_raw().into_iter().map(|v| v as f32 / 255.0).collect();
    Ok(PlanarImage::from_gray(ImageF32::from_vec(w, h, data)))
}

/// Save a planar image, clamping values to [0, 1] before quantising.
///
/// One-channel images are written as grayscale, three-channel as RGB.
pub fn save_planar_image(image: &PlanarImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (image.width() as u32, image.height() as u32);
    let quantize = |v: f32| (v * 255.0).clamp(0.0, 255.0) as u8;
    let saved = match image.channels() {
        1 => {
            let mut out = GrayImage::new(w, h);
            for (x, y, px) in out.enumerate_pixels_mut() {
                *px = Luma([quantize(image.get(x as usize, y as usize, 0))]);
            }
            out.save(path)
        }
        3 => {
            let mut out = RgbImage::new(w, h);
            for (x, y, px) in out.enumerate_pixels_mut() {
                let (xu, yu) = (x as usize, y as usize);
                *px = Rgb([
                    quantize(image.get(xu, yu, 0)),
                    quantize(image.get(xu, yu, 1)),
                    quantize(image.get(xu, yu, 2)),
                ]);
            }
            out.save(path)
        }
        n => return Err(format!("Cannot save {n}-channel image {}", path.display())),
    };
    saved.map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
