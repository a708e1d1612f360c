//! Sobel image gradients and their magnitude.
//!
//! - Convolves the 3×3 Sobel pair with reflect-101 borders.
//! - Outputs per‑pixel `gx`, `gy` and `mag = sqrt(gx^2+gy^2)`.
//!
//! Kernels are unnormalised, so a unit step edge produces a magnitude of 4.
use super::reflect101;
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

/// Compute Sobel gradients on a single‑channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let w = l.w;
    let h = l.h;
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);

    if w == 0 || h == 0 {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let rows = [
            l.row(reflect101(y as isize - 1, h)),
            l.row(y),
            l.row(reflect101(y as isize + 1, h)),
        ];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [reflect101(x as isize - 1, w), x, reflect101(x as isize + 1, w)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                for (kx, &sx) in x_idx.iter().enumerate() {
                    let sample = yy_row[sx];
                    sum_x += sample * kx_row[kx];
                    sum_y += sample * ky_row[kx];
                }
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

/// Sobel gradient magnitude only.
pub fn gradient_magnitude(l: &ImageF32) -> ImageF32 {
    sobel_gradients(l).mag
}
