use crate::direction::{Axis, Direction, DIRECTION_COUNT};
use crate::image::ImageF32;

/// Illumination per direction and cell, each value in [0, 1].
///
/// Slices are indexed by [`Direction::index`]; within a slice `x` is the column
/// and `y` the row.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadowMap {
    grid_size: usize,
    slices: [ImageF32; DIRECTION_COUNT],
}

/// Saved contents of the row and column lines through one cell.
///
/// Taken before a provisional move so a rejected move can put the map back
/// without a recompute.
#[derive(Clone, Debug)]
pub struct LineSnapshot {
    row: usize,
    col: usize,
    lines: [Vec<f32>; DIRECTION_COUNT],
}

impl ShadowMap {
    /// Map with every cell fully lit from every direction.
    pub fn lit(grid_size: usize) -> Self {
        Self {
            grid_size,
            slices: std::array::from_fn(|_| ImageF32::filled(grid_size, grid_size, 1.0)),
        }
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    pub fn slice(&self, direction: Direction) -> &ImageF32 {
        &self.slices[direction.index()]
    }

    #[inline]
    pub fn get(&self, direction: Direction, row: usize, col: usize) -> f32 {
        self.slices[direction.index()].get(col, row)
    }

    /// Copy out the line of `direction` through `fixed`.
    pub fn read_line(&self, direction: Direction, fixed: usize) -> Vec<f32> {
        let axis = direction.axis();
        (0..self.grid_size)
            .map(|pos| {
                let (row, col) = axis.join(fixed, pos);
                self.get(direction, row, col)
            })
            .collect()
    }

    /// Overwrite the line of `direction` through `fixed`.
    pub(crate) fn write_line(&mut self, direction: Direction, fixed: usize, values: &[f32]) {
        debug_assert_eq!(values.len(), self.grid_size);
        let slice = &mut self.slices[direction.index()];
        match direction.axis() {
            Axis::Row => {
                let start = slice.idx(0, fixed);
                slice.data[start..start + values.len()].copy_from_slice(values);
            }
            Axis::Column => {
                for (row, &v) in values.iter().enumerate() {
                    slice.set(fixed, row, v);
                }
            }
        }
    }

    /// Save every line an update at `(row, col)` would overwrite.
    pub fn snapshot_lines(&self, row: usize, col: usize) -> LineSnapshot {
        LineSnapshot {
            row,
            col,
            lines: Direction::ALL.map(|d| {
                let (fixed, _) = d.axis().split(row, col);
                self.read_line(d, fixed)
            }),
        }
    }

    /// Put back the lines saved by [`ShadowMap::snapshot_lines`].
    pub fn restore_lines(&mut self, snapshot: &LineSnapshot) {
        for d in Direction::ALL {
            let (fixed, _) = d.axis().split(snapshot.row, snapshot.col);
            self.write_line(d, fixed, &snapshot.lines[d.index()]);
        }
    }

    /// Largest per-cell difference to `other` across all directions.
    pub fn max_abs_diff(&self, other: &ShadowMap) -> f32 {
        self.slices
            .iter()
            .zip(other.slices.iter())
            .map(|(a, b)| a.max_abs_diff(b))
            .fold(0.0, f32::max)
    }

    /// Fraction of lit cells per direction, in [`Direction::ALL`] order.
    pub fn lit_fraction(&self) -> [f64; DIRECTION_COUNT] {
        let cells = (self.grid_size * self.grid_size).max(1) as f64;
        Direction::ALL.map(|d| self.slice(d).data.iter().map(|&v| v as f64).sum::<f64>() / cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_line_respects_axis() {
        let mut map = ShadowMap::lit(3);
        map.write_line(Direction::West, 1, &[0.0, 0.5, 0.0]);
        map.write_line(Direction::North, 2, &[0.25, 0.25, 0.25]);
        assert_eq!(map.get(Direction::West, 1, 1), 0.5);
        assert_eq!(map.get(Direction::West, 0, 1), 1.0);
        assert_eq!(map.get(Direction::North, 0, 2), 0.25);
        assert_eq!(map.get(Direction::North, 2, 1), 1.0);
        assert_eq!(map.read_line(Direction::North, 2), vec![0.25; 3]);
    }

    #[test]
    fn snapshot_restores_touched_lines() {
        let original = ShadowMap::lit(4);
        let mut map = original.clone();
        let snap = map.snapshot_lines(1, 2);
        map.write_line(Direction::East, 1, &[0.0; 4]);
        map.write_line(Direction::South, 2, &[0.0; 4]);
        assert!(map.max_abs_diff(&original) > 0.5);
        map.restore_lines(&snap);
        assert_eq!(map, original);
    }

    #[test]
    fn lit_fraction_of_fresh_map_is_one() {
        let map = ShadowMap::lit(5);
        assert!(map.lit_fraction().iter().all(|&f| (f - 1.0).abs() < 1e-12));
    }
}
