//! Per-direction illumination maps derived from a height field.
//!
//! For every direction the engine walks each grid line, builds a running
//! "shadow ceiling" from the `radius` cells on the lit side of each cell
//! (occluder height minus distance, i.e. a fixed 45° falloff in grid units),
//! and stores `clamp(height - ceiling, 0, 1)`: 1 for lit, 0 for shaded.
//!
//! A single-cell change only touches the row and the column through that
//! cell, so the annealer keeps the map current with
//! [`ShadowEngine::update_lines`] instead of a full recompute.

pub mod engine;
pub mod map;

pub use engine::{ShadowEngine, SHADOW_SENTINEL};
pub use map::{LineSnapshot, ShadowMap};
