//! Image filters used by the objective: local-average blur and gradient
//! magnitude.
//!
//! Both filters operate on whole [`ImageF32`](crate::image::ImageF32) rasters
//! and allocate their output. Borders use reflect-101 extension
//! (`dcb|abcd|cba`), so a constant image stays constant under the blur and
//! has exactly zero gradient everywhere, including the outermost frame.

pub mod grad;
pub mod separable;

pub use grad::{gradient_magnitude, sobel_gradients, Grad};
pub use separable::box_blur;

/// Map a possibly out-of-range index onto `0..n` by reflect-101 mirroring.
///
/// Valid for offsets of at most `n - 1` past either edge, which covers every
/// kernel radius used here.
#[inline]
pub(crate) fn reflect101(i: isize, n: usize) -> usize {
    if n <= 1 {
        return 0;
    }
    let last = n as isize - 1;
    let mut i = i.abs();
    if i > last {
        i = 2 * last - i;
    }
    i.clamp(0, last) as usize
}

#[cfg(test)]
mod tests {
    use super::reflect101;

    #[test]
    fn reflect101_mirrors_without_repeating_the_edge() {
        assert_eq!(reflect101(-1, 5), 1);
        assert_eq!(reflect101(-2, 5), 2);
        assert_eq!(reflect101(0, 5), 0);
        assert_eq!(reflect101(4, 5), 4);
        assert_eq!(reflect101(5, 5), 3);
        assert_eq!(reflect101(6, 5), 2);
        assert_eq!(reflect101(-1, 1), 0);
        assert_eq!(reflect101(1, 2), 1);
        assert_eq!(reflect101(2, 2), 0);
    }
}
