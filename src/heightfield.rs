//! Square integer height grid mutated one cell at a time by the annealer.
use crate::direction::Axis;
use crate::image::ImageF32;

/// `size × size` grid of integer heights in row-major order.
///
/// Heights may go negative; [`HeightField::normalized`] shifts the field so its
/// minimum sits at zero before export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightField {
    size: usize,
    data: Vec<i32>,
}

impl HeightField {
    /// All-zero field.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// Wrap row-major heights. Returns `None` unless `data.len() == size²`.
    pub fn from_vec(size: usize, data: Vec<i32>) -> Option<Self> {
        (data.len() == size * size).then_some(Self { size, data })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.size + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.size + col] = value;
    }

    /// Add `delta` to one cell in place.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, delta: i32) {
        self.data[row * self.size + col] += delta;
    }

    /// Height at `position` on the line of `axis` through `fixed`.
    #[inline]
    pub fn line_value(&self, axis: Axis, fixed: usize, position: usize) -> i32 {
        let (row, col) = axis.join(fixed, position);
        self.get(row, col)
    }

    pub fn min(&self) -> i32 {
        self.data.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> i32 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// True when every cell holds the same height.
    pub fn is_flat(&self) -> bool {
        self.min() == self.max()
    }

    /// Copy shifted so the lowest cell is zero.
    pub fn normalized(&self) -> HeightField {
        let floor = self.min();
        HeightField {
            size: self.size,
            data: self.data.iter().map(|&v| v - floor).collect(),
        }
    }

    /// Heights as a float raster (x = column, y = row).
    pub fn to_image(&self) -> ImageF32 {
        ImageF32 {
            w: self.size,
            h: self.size,
            stride: self.size,
            data: self.data.iter().map(|&v| v as f32).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_subtract_restores_cell() {
        let mut hf = HeightField::new(4);
        hf.add(1, 2, 3);
        assert_eq!(hf.get(1, 2), 3);
        hf.add(1, 2, -3);
        assert_eq!(hf, HeightField::new(4));
    }

    #[test]
    fn line_value_follows_axis() {
        let hf = HeightField::from_vec(3, (0..9).collect()).unwrap();
        assert_eq!(hf.line_value(Axis::Row, 1, 2), 5);
        assert_eq!(hf.line_value(Axis::Column, 1, 2), 7);
    }

    #[test]
    fn normalized_shifts_minimum_to_zero() {
        let hf = HeightField::from_vec(2, vec![-3, 0, 2, -1]).unwrap();
        let norm = hf.normalized();
        assert_eq!(norm, HeightField::from_vec(2, vec![0, 3, 5, 2]).unwrap());
        assert!(!hf.is_flat());
        assert!(HeightField::from_vec(2, vec![4; 4]).unwrap().is_flat());
    }

    #[test]
    fn image_uses_column_as_x() {
        let hf = HeightField::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        let img = hf.to_image();
        assert_eq!(img.get(1, 0), 2.0);
        assert_eq!(img.get(0, 1), 3.0);
    }
}
