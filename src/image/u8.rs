use super::ImageF32;

/// Borrowed 8-bit grayscale view with an explicit row stride.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Convert to an owned float raster with intensities mapped to [0, 1].
    pub fn to_unit_f32(&self) -> ImageF32 {
        use crate::image::{ImageView, ImageViewMut};

        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            let src = self.row(y);
            for (dst, &px) in out.row_mut(y).iter_mut().zip(src) {
                *dst = px as f32 / 255.0;
            }
        }
        out
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
