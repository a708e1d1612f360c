//! Shadow self-consistency test for single-cell height changes.
//!
//! Every direction looks at a window of `radius + 1` cells on one line and a
//! pivot cell at its end. The move is rejected when, for any direction, the
//! pivot stands above every window cell raised by its distance to the pivot:
//!
//! - raising a cell: the pivot is the cell `radius + 1` steps away against the
//!   light, and the window runs from the pivot's neighbour up to the changed
//!   cell;
//! - lowering a cell: the pivot is the changed cell itself and the window runs
//!   `radius + 1` steps away from it against the light.
//!
//! Directions whose window would leave the grid are skipped.
use crate::direction::Direction;
use crate::heightfield::HeightField;

/// Result of one direction's window test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowCheck {
    /// The window does not fit inside the grid; no constraint.
    Skipped,
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug)]
pub struct LegalityChecker {
    grid_size: usize,
    radius: usize,
}

impl LegalityChecker {
    pub fn new(grid_size: usize, radius: usize) -> Self {
        Self { grid_size, radius }
    }

    /// Test a change of `delta` at `(row, col)` that has already been applied
    /// to `height`. The caller reverts the change when this returns `false`.
    pub fn is_legal(&self, height: &HeightField, row: usize, col: usize, delta: i32) -> bool {
        Direction::ALL
            .iter()
            .all(|&d| self.check_direction(height, row, col, delta, d) != WindowCheck::Fail)
    }

    /// Window test for one direction.
    pub fn check_direction(
        &self,
        height: &HeightField,
        row: usize,
        col: usize,
        delta: i32,
        direction: Direction,
    ) -> WindowCheck {
        let axis = direction.axis();
        let step = direction.step();
        let reach = self.radius as isize + 1;
        let (fixed, pos) = axis.split(row, col);
        let pos = pos as isize;

        let far = pos - reach * step;
        if far < 0 || far >= self.grid_size as isize {
            return WindowCheck::Skipped;
        }

        let (pivot, toward) = if delta > 0 { (far, step) } else { (pos, -step) };
        let pivot_height = height.line_value(axis, fixed, pivot as usize);
        let peak = (1..=reach)
            .map(|k| height.line_value(axis, fixed, (pivot + k * toward) as usize) + k as i32)
            .max()
            .unwrap_or(i32::MIN);

        if peak < pivot_height {
            WindowCheck::Fail
        } else {
            WindowCheck::Pass
        }
    }
}
