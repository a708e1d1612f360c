use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shadow_relief::image::ImageF32;
use shadow_relief::HeightField;

/// Uniform gray target.
pub fn flat_target(size: usize, value: f32) -> ImageF32 {
    ImageF32::filled(size, size, value)
}

/// Black target with a single white pixel at `(row, col)`.
pub fn peak_target(size: usize, row: usize, col: usize) -> ImageF32 {
    let mut img = ImageF32::new(size, size);
    img.set(col, row, 1.0);
    img
}

/// White disc of radius `r` centred in a black square.
pub fn disc_target(size: usize, r: f32) -> ImageF32 {
    assert!(size > 0, "image dimensions must be positive");
    let c = (size as f32 - 1.0) / 2.0;
    let mut img = ImageF32::new(size, size);
    for y in 0..size {
        for x in 0..size {
            let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
            img.set(x, y, if d <= r { 1.0 } else { 0.0 });
        }
    }
    img
}

/// Vertical white bar on black, `width` pixels wide starting at column `x0`.
pub fn bar_target(size: usize, x0: usize, width: usize) -> ImageF32 {
    let mut img = ImageF32::new(size, size);
    for y in 0..size {
        for x in x0..(x0 + width).min(size) {
            img.set(x, y, 1.0);
        }
    }
    img
}

/// Random heights in `-amplitude..=amplitude`.
pub fn random_field(size: usize, amplitude: i32, seed: u64) -> HeightField {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size * size)
        .map(|_| rng.gen_range(-amplitude..=amplitude))
        .collect();
    HeightField::from_vec(size, data).expect("size matches")
}
