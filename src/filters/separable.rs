//! 3×3 local-average blur, applied as two 3-tap passes.
use super::reflect101;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Normalised 3-tap box kernel; applied on both axes it is the 3×3 mean.
const BOX_TAPS: [f32; 3] = [1.0 / 3.0; 3];

/// 3×3 local-average blur with reflect-101 borders.
pub fn box_blur(src: &ImageF32) -> ImageF32 {
    let (w, h) = (src.w, src.h);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let mut horiz = ImageF32::new(w, h);
    for y in 0..h {
        let src_row = src.row(y);
        for (x, dst) in horiz.row_mut(y).iter_mut().enumerate() {
            *dst = BOX_TAPS
                .iter()
                .enumerate()
                .map(|(k, &tap)| src_row[reflect101(x as isize + k as isize - 1, w)] * tap)
                .sum();
        }
    }

    for y in 0..h {
        let rows: [&[f32]; 3] = [-1isize, 0, 1].map(|dy| horiz.row(reflect101(y as isize + dy, h)));
        for (x, dst) in out.row_mut(y).iter_mut().enumerate() {
            *dst = rows
                .iter()
                .zip(BOX_TAPS.iter())
                .map(|(row, &tap)| row[x] * tap)
                .sum();
        }
    }
    out
}
