//! Owned single-channel f32 raster in row-major layout (stride == width).
//!
//! Every numeric grid in the solver that is not a height field lives in one of
//! these: target photos, filtered targets, shadow-map slices and the outputs of
//! the blur/gradient filters.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// Construct a buffer of size `w × h` with every pixel set to `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// True when the raster is `size × size`.
    pub fn is_square_of(&self, size: usize) -> bool {
        self.w == size && self.h == size
    }

    /// Largest absolute per-pixel difference against `other` (same shape).
    pub fn max_abs_diff(&self, other: &ImageF32) -> f32 {
        debug_assert_eq!((self.w, self.h), (other.w, other.h));
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max)
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;

    #[test]
    fn rows_follow_row_major_layout() {
        let mut img = ImageF32::new(2, 3);
        img.set(0, 2, 4.0);
        img.set(1, 2, 5.0);
        img.set(1, 1, 3.0);
        assert_eq!(img.row(2), &[4.0, 5.0]);
        assert_eq!(img.get(1, 1), 3.0);
        assert_eq!(img.rows().count(), 3);
    }

    #[test]
    fn diff_and_shape() {
        let a = ImageF32::filled(4, 4, 0.5);
        let mut b = a.clone();
        b.set(3, 2, 0.75);
        assert!((a.max_abs_diff(&b) - 0.25).abs() < 1e-6);
        assert!(a.is_square_of(4));
        assert!(!a.is_square_of(5));
    }
}
