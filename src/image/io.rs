//! I/O helpers for grayscale images and JSON.
//!
//! - `load_square_target`: decode, resize to `size × size` and normalize to [0, 1].
//! - `save_grayscale_f32`: write an `ImageF32` to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a photo as a `size × size` target with intensities in [0, 1].
///
/// Non-square inputs are stretched; the antialiasing Lanczos filter keeps
/// downscaled photos free of aliasing patterns that the gradient term would
/// otherwise try to reproduce.
pub fn load_square_target(path: &Path, size: usize) -> Result<ImageF32, String> {
    if size == 0 {
        return Err(format!("Cannot resize {} to an empty target", path.display()));
    }
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let side = u32::try_from(size).map_err(|_| format!("Target size {size} is too large"))?;
    let resized = imageops::resize(&img, side, side, FilterType::Lanczos3);
    let view = ImageU8 {
        w: size,
        h: size,
        stride: size,
        data: resized.as_raw(),
    };
    Ok(view.to_unit_f32())
}

/// Save a float image to a grayscale PNG, clamping values in [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
