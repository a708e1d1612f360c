use super::map::ShadowMap;
use crate::direction::Direction;
use crate::heightfield::HeightField;

/// Height assumed past the grid boundary; low enough that edge cells are never
/// shaded by the outside.
pub const SHADOW_SENTINEL: i32 = -2000;

/// Computes [`ShadowMap`]s for a fixed grid size and shadow radius.
#[derive(Clone, Copy, Debug)]
pub struct ShadowEngine {
    grid_size: usize,
    radius: usize,
}

impl ShadowEngine {
    pub fn new(grid_size: usize, radius: usize) -> Self {
        Self { grid_size, radius }
    }

    /// Full recompute: every row and column for all directions.
    pub fn compute_full(&self, height: &HeightField) -> ShadowMap {
        let mut map = ShadowMap::lit(self.grid_size);
        for i in 0..self.grid_size {
            self.update_lines(height, &mut map, i, i);
        }
        map
    }

    /// Copy of `previous` with the row and column through `(row, col)`
    /// recomputed from `height`.
    pub fn compute_incremental(
        &self,
        height: &HeightField,
        previous: &ShadowMap,
        row: usize,
        col: usize,
    ) -> ShadowMap {
        let mut next = previous.clone();
        self.update_lines(height, &mut next, row, col);
        next
    }

    /// In-place form of [`ShadowEngine::compute_incremental`].
    ///
    /// East/West entries of `row` and South/North entries of `col` are
    /// rewritten; everything else is left as is.
    pub fn update_lines(&self, height: &HeightField, map: &mut ShadowMap, row: usize, col: usize) {
        debug_assert_eq!(height.size(), self.grid_size);
        let mut line = vec![0.0f32; self.grid_size];
        for direction in Direction::ALL {
            let (fixed, _) = direction.axis().split(row, col);
            self.illuminate_line(height, direction, fixed, &mut line);
            map.write_line(direction, fixed, &line);
        }
    }

    /// Illumination of every cell on one line, in grid order.
    fn illuminate_line(
        &self,
        height: &HeightField,
        direction: Direction,
        fixed: usize,
        out: &mut [f32],
    ) {
        let axis = direction.axis();
        let step = direction.step();
        let n = self.grid_size as isize;
        for (pos, slot) in out.iter_mut().enumerate() {
            let own = height.line_value(axis, fixed, pos);
            let ceiling = (1..=self.radius as isize)
                .map(|k| {
                    let p = pos as isize + k * step;
                    let h = if (0..n).contains(&p) {
                        height.line_value(axis, fixed, p as usize)
                    } else {
                        SHADOW_SENTINEL
                    };
                    h - k as i32
                })
                .max()
                .unwrap_or(SHADOW_SENTINEL);
            *slot = (own - ceiling).clamp(0, 1) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_field_is_fully_lit() {
        let engine = ShadowEngine::new(6, 2);
        let map = engine.compute_full(&HeightField::new(6));
        assert_eq!(map, ShadowMap::lit(6));
    }

    #[test]
    fn tower_shades_cells_on_its_far_side() {
        // One tower of height 3 at (2, 4) on a 7x7 grid, radius 2.
        let mut hf = HeightField::new(7);
        hf.set(2, 4, 3);
        let map = ShadowEngine::new(7, 2).compute_full(&hf);

        // East light: cells west of the tower within the radius go dark.
        assert_eq!(map.get(Direction::East, 2, 3), 0.0);
        assert_eq!(map.get(Direction::East, 2, 2), 0.0);
        assert_eq!(map.get(Direction::East, 2, 1), 1.0);
        assert_eq!(map.get(Direction::East, 2, 5), 1.0);
        // West light shades the other side.
        assert_eq!(map.get(Direction::West, 2, 5), 0.0);
        assert_eq!(map.get(Direction::West, 2, 6), 0.0);
        assert_eq!(map.get(Direction::West, 2, 3), 1.0);
        // South light: cells north of the tower.
        assert_eq!(map.get(Direction::South, 1, 4), 0.0);
        assert_eq!(map.get(Direction::South, 0, 4), 0.0);
        assert_eq!(map.get(Direction::South, 3, 4), 1.0);
        // North light: cells south of the tower.
        assert_eq!(map.get(Direction::North, 3, 4), 0.0);
        assert_eq!(map.get(Direction::North, 4, 4), 0.0);
        assert_eq!(map.get(Direction::North, 5, 4), 1.0);
        // The tower itself stays lit and other lines are untouched.
        for d in Direction::ALL {
            assert_eq!(map.get(d, 2, 4), 1.0);
            assert_eq!(map.get(d, 5, 0), 1.0);
        }
    }

    #[test]
    fn falloff_lets_distant_cells_escape() {
        // Height 1 tower only reaches its direct neighbour.
        let mut hf = HeightField::new(5);
        hf.set(0, 3, 1);
        let map = ShadowEngine::new(5, 3).compute_full(&hf);
        assert_eq!(map.get(Direction::East, 0, 2), 0.0);
        assert_eq!(map.get(Direction::East, 0, 1), 1.0);
    }

    #[test]
    fn lowered_cell_is_shaded_by_flat_neighbours() {
        let mut hf = HeightField::new(5);
        hf.set(2, 2, -1);
        let map = ShadowEngine::new(5, 2).compute_full(&hf);
        for d in Direction::ALL {
            assert_eq!(map.get(d, 2, 2), 0.0, "{d}");
        }
    }

    #[test]
    fn incremental_leaves_other_lines_alone() {
        let engine = ShadowEngine::new(6, 2);
        let mut hf = HeightField::new(6);
        let base = engine.compute_full(&hf);
        hf.set(3, 3, 4);
        hf.set(0, 0, 4);
        // Only (3, 3)'s lines are refreshed; the change at (0, 0) is ignored.
        let next = engine.compute_incremental(&hf, &base, 3, 3);
        assert_eq!(next.get(Direction::East, 3, 2), 0.0);
        assert_eq!(next.get(Direction::South, 2, 3), 0.0);
        assert_eq!(next.get(Direction::West, 0, 1), 1.0);
        assert_eq!(base, ShadowMap::lit(6));
    }
}
